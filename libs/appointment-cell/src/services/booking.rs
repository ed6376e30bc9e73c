use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{SharedStorage, StoreError};
use shared_models::{Appointment, AppointmentUpdate, NewAppointment};

/// Books and looks up appointments. Inputs are expected to be validated
/// already; nothing here checks for overlapping slots.
pub struct BookingService {
    store: SharedStorage,
}

impl BookingService {
    pub fn new(store: SharedStorage) -> Self {
        Self { store }
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        self.store.get_appointments().await
    }

    pub async fn book(&self, appointment: NewAppointment) -> Result<Appointment, StoreError> {
        debug!(
            "Booking {} at {} on {} {}",
            appointment.service, appointment.location, appointment.appointment_date, appointment.appointment_time
        );

        let appointment = self.store.create_appointment(appointment).await?;
        info!("Appointment {} booked with status {}", appointment.id, appointment.status);
        Ok(appointment)
    }

    pub async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>, StoreError> {
        self.store.get_appointment(id).await
    }

    /// Not routed; confirmations and payment updates are applied by staff tooling.
    pub async fn update_appointment(
        &self,
        id: Uuid,
        update: AppointmentUpdate,
    ) -> Result<Option<Appointment>, StoreError> {
        debug!("Updating appointment {}", id);
        self.store.update_appointment(id, update).await
    }
}
