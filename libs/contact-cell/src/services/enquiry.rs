use tracing::info;

use shared_database::{SharedStorage, StoreError};
use shared_models::{Contact, NewContact};

pub struct EnquiryService {
    store: SharedStorage,
}

impl EnquiryService {
    pub fn new(store: SharedStorage) -> Self {
        Self { store }
    }

    /// Stores the enquiry as-is. Resubmissions create new records.
    pub async fn submit(&self, contact: NewContact) -> Result<Contact, StoreError> {
        let contact = self.store.create_contact(contact).await?;
        info!("Contact enquiry {} received from {}", contact.id, contact.location);
        Ok(contact)
    }

    pub async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        self.store.get_contacts().await
    }
}
