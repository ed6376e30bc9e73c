// libs/appointment-cell/src/router.rs
use axum::{routing::get, Router};

use shared_database::SharedStorage;

use crate::handlers;

pub fn appointment_routes(store: SharedStorage) -> Router {
    Router::new()
        .route(
            "/appointments",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .with_state(store)
}
