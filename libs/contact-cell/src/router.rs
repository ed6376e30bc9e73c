use axum::{routing::post, Router};

use shared_database::SharedStorage;

use crate::handlers;

pub fn contact_routes(store: SharedStorage) -> Router {
    Router::new()
        .route("/contact", post(handlers::submit_contact))
        // Path used by the serverless deployment of the site.
        .route("/contacts", post(handlers::submit_contact))
        .with_state(store)
}
