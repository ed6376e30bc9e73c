use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use shared_database::SharedStorage;
use shared_models::{AppError, Contact};
use shared_utils::rejected_body;

use crate::models::ContactRequest;
use crate::services::EnquiryService;

#[axum::debug_handler]
pub async fn submit_contact(
    State(store): State<SharedStorage>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let Json(request) = payload.map_err(rejected_body)?;
    let new_contact = request.validate()?;

    let contact = EnquiryService::new(store)
        .submit(new_contact)
        .await
        .map_err(|e| e.into_internal("Failed to submit contact form"))?;

    Ok((StatusCode::CREATED, Json(contact)))
}
