use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use shared_models::{
    AppError, Appointment, AppointmentUpdate, Contact, GalleryItem, NewAppointment, NewContact,
    NewGalleryItem, NewService, NewTestimonial, NewUser, Service, Testimonial, User,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Collection '{0}' is unavailable: a writer panicked while holding its lock")]
    Poisoned(&'static str),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Logs the underlying fault and hides it behind a generic 500 message.
    pub fn into_internal(self, message: &str) -> AppError {
        tracing::error!("{}: {}", message, self);
        AppError::Internal(message.to_string())
    }
}

/// Handle passed into every cell router.
pub type SharedStorage = Arc<dyn Storage>;

/// Data access for every collection the site works with.
///
/// Lookups that miss return `Ok(None)`; `Err` is reserved for faults in the
/// backend itself. Implementations never validate input, that happens at the
/// HTTP boundary.
#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    /// First user with this exact username, if any.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    // Appointments
    async fn get_appointments(&self) -> Result<Vec<Appointment>, StoreError>;
    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>, StoreError>;
    async fn create_appointment(&self, appointment: NewAppointment) -> Result<Appointment, StoreError>;
    async fn update_appointment(
        &self,
        id: Uuid,
        update: AppointmentUpdate,
    ) -> Result<Option<Appointment>, StoreError>;

    // Services
    /// Active services only.
    async fn get_services(&self) -> Result<Vec<Service>, StoreError>;
    async fn get_all_services(&self) -> Result<Vec<Service>, StoreError>;
    async fn get_service(&self, id: Uuid) -> Result<Option<Service>, StoreError>;
    async fn get_service_by_slug(&self, slug: &str) -> Result<Option<Service>, StoreError>;
    async fn create_service(&self, service: NewService) -> Result<Service, StoreError>;

    // Testimonials
    async fn get_testimonials(&self) -> Result<Vec<Testimonial>, StoreError>;
    async fn get_visible_testimonials(&self) -> Result<Vec<Testimonial>, StoreError>;
    async fn create_testimonial(&self, testimonial: NewTestimonial) -> Result<Testimonial, StoreError>;

    // Gallery
    async fn get_gallery_items(&self) -> Result<Vec<GalleryItem>, StoreError>;
    async fn get_visible_gallery_items(&self) -> Result<Vec<GalleryItem>, StoreError>;
    /// Visible items in `category`; an unknown category yields an empty list.
    async fn get_gallery_items_by_category(&self, category: &str) -> Result<Vec<GalleryItem>, StoreError>;
    async fn create_gallery_item(&self, item: NewGalleryItem) -> Result<GalleryItem, StoreError>;

    // Contacts
    async fn get_contacts(&self) -> Result<Vec<Contact>, StoreError>;
    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StoreError>;
}
