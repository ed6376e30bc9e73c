use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_models::{
    Appointment, AppointmentUpdate, Contact, GalleryItem, NewAppointment, NewContact,
    NewGalleryItem, NewService, NewTestimonial, NewUser, Service, Testimonial, User,
};

use crate::seed;
use crate::storage::{Storage, StoreError};

/// Process-local store. Every collection is a `Vec` behind its own lock so
/// listings come back in insertion order; locks are never held across an
/// `.await`.
pub struct MemStorage {
    users: RwLock<Vec<User>>,
    appointments: RwLock<Vec<Appointment>>,
    services: RwLock<Vec<Service>>,
    testimonials: RwLock<Vec<Testimonial>>,
    gallery_items: RwLock<Vec<GalleryItem>>,
    contacts: RwLock<Vec<Contact>>,
}

impl MemStorage {
    /// Store pre-populated with the site's services, testimonials and gallery.
    pub fn new() -> Self {
        let store = Self::empty();
        store.seed();
        store
    }

    /// Store with no records at all.
    pub fn empty() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            appointments: RwLock::new(Vec::new()),
            services: RwLock::new(Vec::new()),
            testimonials: RwLock::new(Vec::new()),
            gallery_items: RwLock::new(Vec::new()),
            contacts: RwLock::new(Vec::new()),
        }
    }

    fn seed(&self) {
        let now = Utc::now();

        // Nothing else can observe the locks yet, so they cannot be poisoned.
        if let Ok(mut services) = self.services.write() {
            services.extend(
                seed::services()
                    .into_iter()
                    .map(|s| Service::from_new(Uuid::new_v4(), s)),
            );
        }
        if let Ok(mut testimonials) = self.testimonials.write() {
            testimonials.extend(
                seed::testimonials()
                    .into_iter()
                    .map(|t| Testimonial::from_new(Uuid::new_v4(), now, t)),
            );
        }
        if let Ok(mut gallery_items) = self.gallery_items.write() {
            gallery_items.extend(
                seed::gallery_items()
                    .into_iter()
                    .map(|g| GalleryItem::from_new(Uuid::new_v4(), g)),
            );
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn read<'a, T>(lock: &'a RwLock<T>, name: &'static str) -> Result<RwLockReadGuard<'a, T>, StoreError> {
    lock.read().map_err(|_| StoreError::Poisoned(name))
}

fn write<'a, T>(lock: &'a RwLock<T>, name: &'static str) -> Result<RwLockWriteGuard<'a, T>, StoreError> {
    lock.write().map_err(|_| StoreError::Poisoned(name))
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = read(&self.users, "users")?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = read(&self.users, "users")?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let user = User::from_new(Uuid::new_v4(), user);
        write(&self.users, "users")?.push(user.clone());
        debug!("Created user {}", user.id);
        Ok(user)
    }

    async fn get_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        Ok(read(&self.appointments, "appointments")?.clone())
    }

    async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>, StoreError> {
        let appointments = read(&self.appointments, "appointments")?;
        Ok(appointments.iter().find(|a| a.id == id).cloned())
    }

    async fn create_appointment(&self, appointment: NewAppointment) -> Result<Appointment, StoreError> {
        let appointment = Appointment::from_new(Uuid::new_v4(), Utc::now(), appointment);
        write(&self.appointments, "appointments")?.push(appointment.clone());
        debug!("Created appointment {}", appointment.id);
        Ok(appointment)
    }

    async fn update_appointment(
        &self,
        id: Uuid,
        update: AppointmentUpdate,
    ) -> Result<Option<Appointment>, StoreError> {
        let mut appointments = write(&self.appointments, "appointments")?;
        let Some(existing) = appointments.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        existing.apply(update);
        debug!("Updated appointment {}", id);
        Ok(Some(existing.clone()))
    }

    async fn get_services(&self) -> Result<Vec<Service>, StoreError> {
        let services = read(&self.services, "services")?;
        Ok(services.iter().filter(|s| s.is_active).cloned().collect())
    }

    async fn get_all_services(&self) -> Result<Vec<Service>, StoreError> {
        Ok(read(&self.services, "services")?.clone())
    }

    async fn get_service(&self, id: Uuid) -> Result<Option<Service>, StoreError> {
        let services = read(&self.services, "services")?;
        Ok(services.iter().find(|s| s.id == id).cloned())
    }

    async fn get_service_by_slug(&self, slug: &str) -> Result<Option<Service>, StoreError> {
        let services = read(&self.services, "services")?;
        Ok(services.iter().find(|s| s.slug == slug).cloned())
    }

    async fn create_service(&self, service: NewService) -> Result<Service, StoreError> {
        let service = Service::from_new(Uuid::new_v4(), service);
        write(&self.services, "services")?.push(service.clone());
        Ok(service)
    }

    async fn get_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        Ok(read(&self.testimonials, "testimonials")?.clone())
    }

    async fn get_visible_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        let testimonials = read(&self.testimonials, "testimonials")?;
        Ok(testimonials.iter().filter(|t| t.is_visible).cloned().collect())
    }

    async fn create_testimonial(&self, testimonial: NewTestimonial) -> Result<Testimonial, StoreError> {
        let testimonial = Testimonial::from_new(Uuid::new_v4(), Utc::now(), testimonial);
        write(&self.testimonials, "testimonials")?.push(testimonial.clone());
        Ok(testimonial)
    }

    async fn get_gallery_items(&self) -> Result<Vec<GalleryItem>, StoreError> {
        Ok(read(&self.gallery_items, "gallery_items")?.clone())
    }

    async fn get_visible_gallery_items(&self) -> Result<Vec<GalleryItem>, StoreError> {
        let items = read(&self.gallery_items, "gallery_items")?;
        Ok(items.iter().filter(|g| g.is_visible).cloned().collect())
    }

    async fn get_gallery_items_by_category(&self, category: &str) -> Result<Vec<GalleryItem>, StoreError> {
        let items = read(&self.gallery_items, "gallery_items")?;
        Ok(items
            .iter()
            .filter(|g| g.category == category && g.is_visible)
            .cloned()
            .collect())
    }

    async fn create_gallery_item(&self, item: NewGalleryItem) -> Result<GalleryItem, StoreError> {
        let item = GalleryItem::from_new(Uuid::new_v4(), item);
        write(&self.gallery_items, "gallery_items")?.push(item.clone());
        Ok(item)
    }

    async fn get_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(read(&self.contacts, "contacts")?.clone())
    }

    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StoreError> {
        let contact = Contact::from_new(Uuid::new_v4(), Utc::now(), contact);
        write(&self.contacts, "contacts")?.push(contact.clone());
        debug!("Stored contact enquiry {}", contact.id);
        Ok(contact)
    }
}
