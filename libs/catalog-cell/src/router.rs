use axum::{routing::get, Router};

use shared_database::SharedStorage;

use crate::handlers;

pub fn catalog_routes(store: SharedStorage) -> Router {
    Router::new()
        .route("/services", get(handlers::list_services))
        .route("/services/{slug}", get(handlers::get_service))
        .route("/testimonials", get(handlers::list_testimonials))
        .route("/gallery", get(handlers::list_gallery))
        .with_state(store)
}
