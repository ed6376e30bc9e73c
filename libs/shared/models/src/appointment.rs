use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub const STATUS_PENDING: &str = "pending";
pub const PAYMENT_STATUS_PENDING: &str = "pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    /// Display name of the booked service, not its id.
    pub service: String,
    pub location: String,
    pub address: Option<String>,
    pub appointment_date: String,
    pub appointment_time: String,
    pub notes: Option<String>,
    pub status: String,
    pub total_amount: Option<String>,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
}

/// Already-validated appointment data handed to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub location: String,
    pub address: Option<String>,
    pub appointment_date: String,
    pub appointment_time: String,
    pub notes: Option<String>,
    pub status: String,
    pub total_amount: Option<String>,
    pub payment_status: String,
}

/// Partial update; `None` fields are left untouched.
///
/// The nullable fields are doubly optional: an absent key is `None`, while an
/// explicit `null` is `Some(None)` and clears the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub patient_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Option<String>>,
    pub payment_status: Option<String>,
}

// Only called when the key is present, so `null` lands as `Some(None)`.
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Appointment {
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, new_appointment: NewAppointment) -> Self {
        Self {
            id,
            patient_name: new_appointment.patient_name,
            email: new_appointment.email,
            phone: new_appointment.phone,
            service: new_appointment.service,
            location: new_appointment.location,
            address: new_appointment.address,
            appointment_date: new_appointment.appointment_date,
            appointment_time: new_appointment.appointment_time,
            notes: new_appointment.notes,
            status: new_appointment.status,
            total_amount: new_appointment.total_amount,
            payment_status: new_appointment.payment_status,
            created_at,
        }
    }

    /// Shallow merge: every present field replaces the stored value.
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, update: AppointmentUpdate) {
        if let Some(patient_name) = update.patient_name {
            self.patient_name = patient_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(service) = update.service {
            self.service = service;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(appointment_date) = update.appointment_date {
            self.appointment_date = appointment_date;
        }
        if let Some(appointment_time) = update.appointment_time {
            self.appointment_time = appointment_time;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(total_amount) = update.total_amount {
            self.total_amount = total_amount;
        }
        if let Some(payment_status) = update.payment_status {
            self.payment_status = payment_status;
        }
    }
}
