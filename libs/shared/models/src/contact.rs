use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CONTACT_STATUS_NEW: &str = "new";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub message: String,
}

impl Contact {
    /// Every new enquiry starts out with status "new".
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, new_contact: NewContact) -> Self {
        Self {
            id,
            first_name: new_contact.first_name,
            last_name: new_contact.last_name,
            email: new_contact.email,
            phone: new_contact.phone,
            location: new_contact.location,
            message: new_contact.message,
            status: CONTACT_STATUS_NEW.to_string(),
            created_at,
        }
    }
}
