use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::to_bytes, response::Response};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_database::{MemStorage, SharedStorage, Storage, StoreError};
use shared_models::{
    Appointment, AppointmentUpdate, Contact, GalleryItem, NewAppointment, NewContact,
    NewGalleryItem, NewService, NewTestimonial, NewUser, Service, Testimonial, User,
};

/// Freshly seeded store, isolated from every other test.
pub fn seeded_store() -> SharedStorage {
    Arc::new(MemStorage::new())
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

pub struct TestPayloads;

impl TestPayloads {
    pub fn appointment() -> Value {
        json!({
            "patientName": "Ngozi Bello",
            "email": "ngozi.bello@example.com",
            "phone": "08031234567",
            "service": "Preventive Care",
            "location": "home",
            "address": "14 Bourdillon Road, Ikoyi",
            "appointmentDate": "2026-11-02",
            "appointmentTime": "10:00",
            "notes": "Two children also need checkups"
        })
    }

    pub fn appointment_with(field: &str, value: Value) -> Value {
        let mut payload = Self::appointment();
        payload[field] = value;
        payload
    }

    pub fn contact() -> Value {
        json!({
            "firstName": "Tunde",
            "lastName": "Bakare",
            "email": "tunde.bakare@example.com",
            "phone": "08098765432",
            "location": "Victoria Island",
            "message": "Can you run a dental day for 40 staff next month?"
        })
    }

    pub fn contact_with(field: &str, value: Value) -> Value {
        let mut payload = Self::contact();
        payload[field] = value;
        payload
    }
}

/// Storage whose every call fails, for exercising 500 paths.
pub struct FailingStorage;

impl FailingStorage {
    pub fn shared() -> SharedStorage {
        Arc::new(Self)
    }

    fn fail<T>() -> Result<T, StoreError> {
        Err(StoreError::Backend("storage offline".to_string()))
    }
}

#[async_trait]
impl Storage for FailingStorage {
    async fn get_user(&self, _id: Uuid) -> Result<Option<User>, StoreError> {
        Self::fail()
    }
    async fn get_user_by_username(&self, _username: &str) -> Result<Option<User>, StoreError> {
        Self::fail()
    }
    async fn create_user(&self, _user: NewUser) -> Result<User, StoreError> {
        Self::fail()
    }
    async fn get_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        Self::fail()
    }
    async fn get_appointment(&self, _id: Uuid) -> Result<Option<Appointment>, StoreError> {
        Self::fail()
    }
    async fn create_appointment(&self, _appointment: NewAppointment) -> Result<Appointment, StoreError> {
        Self::fail()
    }
    async fn update_appointment(
        &self,
        _id: Uuid,
        _update: AppointmentUpdate,
    ) -> Result<Option<Appointment>, StoreError> {
        Self::fail()
    }
    async fn get_services(&self) -> Result<Vec<Service>, StoreError> {
        Self::fail()
    }
    async fn get_all_services(&self) -> Result<Vec<Service>, StoreError> {
        Self::fail()
    }
    async fn get_service(&self, _id: Uuid) -> Result<Option<Service>, StoreError> {
        Self::fail()
    }
    async fn get_service_by_slug(&self, _slug: &str) -> Result<Option<Service>, StoreError> {
        Self::fail()
    }
    async fn create_service(&self, _service: NewService) -> Result<Service, StoreError> {
        Self::fail()
    }
    async fn get_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        Self::fail()
    }
    async fn get_visible_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        Self::fail()
    }
    async fn create_testimonial(&self, _testimonial: NewTestimonial) -> Result<Testimonial, StoreError> {
        Self::fail()
    }
    async fn get_gallery_items(&self) -> Result<Vec<GalleryItem>, StoreError> {
        Self::fail()
    }
    async fn get_visible_gallery_items(&self) -> Result<Vec<GalleryItem>, StoreError> {
        Self::fail()
    }
    async fn get_gallery_items_by_category(&self, _category: &str) -> Result<Vec<GalleryItem>, StoreError> {
        Self::fail()
    }
    async fn create_gallery_item(&self, _item: NewGalleryItem) -> Result<GalleryItem, StoreError> {
        Self::fail()
    }
    async fn get_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        Self::fail()
    }
    async fn create_contact(&self, _contact: NewContact) -> Result<Contact, StoreError> {
        Self::fail()
    }
}
