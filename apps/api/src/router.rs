use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use appointment_cell::appointment_routes;
use catalog_cell::catalog_routes;
use contact_cell::contact_routes;
use shared_config::AppConfig;
use shared_database::SharedStorage;

pub fn create_router(config: &AppConfig, store: SharedStorage) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .merge(catalog_routes(store.clone()))
        .merge(appointment_routes(store.clone()))
        .merge(contact_routes(store));

    let app = Router::new()
        .route("/", get(|| async { "Mobile Dental Care API is running!" }));

    let app = if config.api_prefix.is_empty() {
        app.merge(api)
    } else {
        app.nest(&config.api_prefix, api)
    };

    app.layer(cors_layer())
}

/// Any origin; pre-flight requests are answered with an empty 200.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            HeaderName::from_static("accept-version"),
            header::CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            header::CONTENT_TYPE,
            header::DATE,
            HeaderName::from_static("x-api-version"),
        ])
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "mobile-dental-care-api"
    }))
}
