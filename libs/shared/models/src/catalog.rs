// Public-facing catalogue records: treatments offered, patient reviews and
// before/after gallery entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    /// External lookup key, unique across services.
    pub slug: String,
    pub description: String,
    pub category: String,
    /// Decimal amount kept as a string, e.g. "25000".
    pub base_price: Option<String>,
    pub duration: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub base_price: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Service {
    pub fn from_new(id: Uuid, new_service: NewService) -> Self {
        Self {
            id,
            name: new_service.name,
            slug: new_service.slug,
            description: new_service.description,
            category: new_service.category,
            base_price: new_service.base_price,
            duration: new_service.duration,
            features: new_service.features,
            is_active: new_service.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    /// Decimal between "0.0" and "5.0".
    pub rating: Option<String>,
    pub content: String,
    /// Display name of the service the review refers to.
    pub service: Option<String>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub rating: Option<String>,
    pub content: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

impl Testimonial {
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, new_testimonial: NewTestimonial) -> Self {
        Self {
            id,
            name: new_testimonial.name,
            location: new_testimonial.location,
            rating: new_testimonial.rating,
            content: new_testimonial.content,
            service: new_testimonial.service,
            is_visible: new_testimonial.is_visible,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub description: Option<String>,
    pub treatment_type: Option<String>,
    pub duration: Option<String>,
    pub is_visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryItem {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub before_image: Option<String>,
    #[serde(default)]
    pub after_image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub treatment_type: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

impl GalleryItem {
    pub fn from_new(id: Uuid, new_item: NewGalleryItem) -> Self {
        Self {
            id,
            title: new_item.title,
            category: new_item.category,
            before_image: new_item.before_image,
            after_image: new_item.after_image,
            description: new_item.description,
            treatment_type: new_item.treatment_type,
            duration: new_item.duration,
            is_visible: new_item.is_visible,
        }
    }
}

fn default_true() -> bool {
    true
}
