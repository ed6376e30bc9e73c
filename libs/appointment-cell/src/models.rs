// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use shared_models::{AppError, NewAppointment, ValidationIssue, PAYMENT_STATUS_PENDING, STATUS_PENDING};
use shared_utils::FieldValidator;

// ==============================================================================
// FIELD NAMES (wire format)
// ==============================================================================

pub const PATIENT_NAME: &str = "patientName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const SERVICE: &str = "service";
pub const LOCATION: &str = "location";
pub const ADDRESS: &str = "address";
pub const APPOINTMENT_DATE: &str = "appointmentDate";
pub const APPOINTMENT_TIME: &str = "appointmentTime";

/// Fields checked on every booking, in form order.
pub const VALIDATED_FIELDS: [&str; 7] = [
    SERVICE,
    LOCATION,
    APPOINTMENT_DATE,
    APPOINTMENT_TIME,
    PATIENT_NAME,
    EMAIL,
    PHONE,
];

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Booking payload as submitted by the client. Everything is optional here so
/// a missing field is reported alongside the other field errors instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub total_amount: Option<String>,
    pub payment_status: Option<String>,
}

impl AppointmentRequest {
    fn check(&self, field: &str, validator: &mut FieldValidator) {
        match field {
            PATIENT_NAME => {
                validator.min_chars(field, self.patient_name.as_deref(), 2, "Patient name must be at least 2 characters");
            }
            EMAIL => {
                validator.email(field, self.email.as_deref(), "Invalid email address");
            }
            PHONE => {
                validator.min_chars(field, self.phone.as_deref(), 10, "Phone number must be at least 10 digits");
            }
            SERVICE => {
                validator.required(field, self.service.as_deref(), "Service is required");
            }
            LOCATION => {
                validator.required(field, self.location.as_deref(), "Location is required");
            }
            APPOINTMENT_DATE => {
                validator.required(field, self.appointment_date.as_deref(), "Appointment date is required");
            }
            APPOINTMENT_TIME => {
                validator.required(field, self.appointment_time.as_deref(), "Appointment time is required");
            }
            // address, notes and the status fields are free-form
            _ => {}
        }
    }

    /// Runs the booking rules for the given fields only.
    pub fn issues_for(&self, fields: &[&str]) -> Vec<ValidationIssue> {
        let mut validator = FieldValidator::new();
        for field in fields {
            self.check(field, &mut validator);
        }
        validator.into_issues()
    }

    /// Validates the whole payload and fills in the status defaults.
    pub fn validate(self) -> Result<NewAppointment, AppError> {
        let issues = self.issues_for(&VALIDATED_FIELDS);
        if !issues.is_empty() {
            return Err(AppError::Validation(issues));
        }

        // Required fields are known to be present past this point.
        Ok(NewAppointment {
            patient_name: self.patient_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            service: self.service.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            address: self.address,
            appointment_date: self.appointment_date.unwrap_or_default(),
            appointment_time: self.appointment_time.unwrap_or_default(),
            notes: self.notes,
            status: self.status.unwrap_or_else(|| STATUS_PENDING.to_string()),
            total_amount: self.total_amount,
            payment_status: self.payment_status.unwrap_or_else(|| PAYMENT_STATUS_PENDING.to_string()),
        })
    }
}

// ==============================================================================
// BOOKING STEPS
// ==============================================================================

/// The four screens of the booking form, each owning a group of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    ChooseService = 1,
    SelectLocation = 2,
    PickDateTime = 3,
    PatientDetails = 4,
}

impl BookingStep {
    pub const FIRST: BookingStep = BookingStep::ChooseService;
    pub const LAST: BookingStep = BookingStep::PatientDetails;

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(BookingStep::ChooseService),
            2 => Some(BookingStep::SelectLocation),
            3 => Some(BookingStep::PickDateTime),
            4 => Some(BookingStep::PatientDetails),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            BookingStep::ChooseService => "Choose Service",
            BookingStep::SelectLocation => "Select Location",
            BookingStep::PickDateTime => "Pick Date & Time",
            BookingStep::PatientDetails => "Your Details",
        }
    }

    pub fn fields(self) -> &'static [&'static str] {
        match self {
            BookingStep::ChooseService => &[SERVICE],
            BookingStep::SelectLocation => &[LOCATION, ADDRESS],
            BookingStep::PickDateTime => &[APPOINTMENT_DATE, APPOINTMENT_TIME],
            BookingStep::PatientDetails => &[PATIENT_NAME, EMAIL, PHONE],
        }
    }

    /// Saturates at the last step.
    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Self::LAST)
    }

    /// Saturates at the first step.
    pub fn previous(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Self::FIRST)
    }

    /// Checks only the fields this step collects.
    pub fn validate(self, request: &AppointmentRequest) -> Result<(), AppError> {
        let issues = request.issues_for(self.fields());
        if issues.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(issues))
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation_saturates() {
        assert_eq!(BookingStep::FIRST.previous(), BookingStep::ChooseService);
        assert_eq!(BookingStep::ChooseService.next(), BookingStep::SelectLocation);
        assert_eq!(BookingStep::PickDateTime.previous(), BookingStep::SelectLocation);
        assert_eq!(BookingStep::LAST.next(), BookingStep::PatientDetails);
    }

    #[test]
    fn test_step_display() {
        assert_eq!(BookingStep::PickDateTime.to_string(), "Step 3: Pick Date & Time");
        assert_eq!(BookingStep::from_number(5), None);
    }

    #[test]
    fn test_every_validated_field_belongs_to_a_step() {
        let steps = [
            BookingStep::ChooseService,
            BookingStep::SelectLocation,
            BookingStep::PickDateTime,
            BookingStep::PatientDetails,
        ];
        for field in VALIDATED_FIELDS {
            assert!(steps.iter().any(|s| s.fields().contains(&field)), "{} has no step", field);
        }
    }
}
