use serde::{Deserialize, Serialize};

use shared_models::{AppError, NewContact};
use shared_utils::FieldValidator;

/// Contact form as submitted; see `validate` for the rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    pub fn validate(self) -> Result<NewContact, AppError> {
        let mut validator = FieldValidator::new();
        validator.min_chars("firstName", self.first_name.as_deref(), 2, "First name must be at least 2 characters");
        validator.min_chars("lastName", self.last_name.as_deref(), 2, "Last name must be at least 2 characters");
        validator.email("email", self.email.as_deref(), "Invalid email address");
        validator.min_chars("phone", self.phone.as_deref(), 10, "Phone number must be at least 10 digits");
        validator.required("location", self.location.as_deref(), "Location is required");
        validator.min_chars("message", self.message.as_deref(), 10, "Message must be at least 10 characters");
        validator.finish()?;

        Ok(NewContact {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}
