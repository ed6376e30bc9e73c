use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::debug;

use shared_database::SharedStorage;
use shared_models::{AppError, GalleryItem, Service, Testimonial};

use crate::models::GalleryQuery;
use crate::services::CatalogService;

#[axum::debug_handler]
pub async fn list_services(
    State(store): State<SharedStorage>,
) -> Result<Json<Vec<Service>>, AppError> {
    let service = CatalogService::new(store);

    let services = service.list_services()
        .await
        .map_err(|e| e.into_internal("Failed to fetch services"))?;

    Ok(Json(services))
}

#[axum::debug_handler]
pub async fn get_service(
    State(store): State<SharedStorage>,
    Path(slug): Path<String>,
) -> Result<Json<Service>, AppError> {
    let service = CatalogService::new(store);

    service.find_service(&slug)
        .await
        .map_err(|e| e.into_internal("Failed to fetch service"))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
}

#[axum::debug_handler]
pub async fn list_testimonials(
    State(store): State<SharedStorage>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let service = CatalogService::new(store);

    let testimonials = service.list_testimonials()
        .await
        .map_err(|e| e.into_internal("Failed to fetch testimonials"))?;

    Ok(Json(testimonials))
}

#[axum::debug_handler]
pub async fn list_gallery(
    State(store): State<SharedStorage>,
    query: Result<Query<GalleryQuery>, QueryRejection>,
) -> Result<Json<Vec<GalleryItem>>, AppError> {
    // An unreadable query string (e.g. a repeated `category`) means no filter.
    let query = query.map(|Query(q)| q).unwrap_or_else(|rejection| {
        debug!("Ignoring gallery query: {}", rejection.body_text());
        GalleryQuery::default()
    });

    let service = CatalogService::new(store);

    let items = service.list_gallery(query.category())
        .await
        .map_err(|e| e.into_internal("Failed to fetch gallery items"))?;

    Ok(Json(items))
}
