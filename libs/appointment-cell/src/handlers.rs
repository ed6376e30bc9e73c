use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use shared_database::SharedStorage;
use shared_models::{AppError, Appointment};
use shared_utils::rejected_body;

use crate::models::AppointmentRequest;
use crate::services::BookingService;

#[axum::debug_handler]
pub async fn list_appointments(
    State(store): State<SharedStorage>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let service = BookingService::new(store);

    let appointments = service.list_appointments()
        .await
        .map_err(|e| e.into_internal("Failed to fetch appointments"))?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(store): State<SharedStorage>,
    payload: Result<Json<AppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let Json(request) = payload.map_err(rejected_body)?;
    let new_appointment = request.validate()?;

    let service = BookingService::new(store);
    let appointment = service.book(new_appointment)
        .await
        .map_err(|e| e.into_internal("Failed to create appointment"))?;

    Ok((StatusCode::CREATED, Json(appointment)))
}
