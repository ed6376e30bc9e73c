use tracing::debug;

use shared_database::{SharedStorage, StoreError};
use shared_models::{GalleryItem, Service, Testimonial};

/// Read-only view over the public catalogue. Listings carry only active
/// services and visible testimonials/gallery items; a slug lookup returns
/// the service whatever its active flag.
pub struct CatalogService {
    store: SharedStorage,
}

impl CatalogService {
    pub fn new(store: SharedStorage) -> Self {
        Self { store }
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, StoreError> {
        self.store.get_services().await
    }

    pub async fn find_service(&self, slug: &str) -> Result<Option<Service>, StoreError> {
        debug!("Looking up service by slug: {}", slug);
        self.store.get_service_by_slug(slug).await
    }

    pub async fn list_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        self.store.get_visible_testimonials().await
    }

    pub async fn list_gallery(&self, category: Option<&str>) -> Result<Vec<GalleryItem>, StoreError> {
        match category {
            Some(category) => {
                debug!("Filtering gallery by category: {}", category);
                self.store.get_gallery_items_by_category(category).await
            }
            None => self.store.get_visible_gallery_items().await,
        }
    }
}
