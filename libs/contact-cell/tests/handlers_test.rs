use assert_matches::assert_matches;
use axum::{extract::State, http::StatusCode, Json};

use contact_cell::handlers::submit_contact;
use contact_cell::models::ContactRequest;
use contact_cell::services::EnquiryService;
use shared_models::AppError;
use shared_utils::test_utils::{seeded_store, TestPayloads};

fn request() -> ContactRequest {
    serde_json::from_value(TestPayloads::contact()).unwrap()
}

#[tokio::test]
async fn test_submit_contact_handler() {
    let store = seeded_store();

    let (status, Json(contact)) = submit_contact(State(store.clone()), Ok(Json(request())))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(contact.status, "new");

    let stored = EnquiryService::new(store).list().await.unwrap();
    assert_eq!(stored, vec![contact]);
}

#[test]
fn test_missing_message_is_required() {
    let mut contact = request();
    contact.message = None;

    match contact.validate() {
        Err(AppError::Validation(issues)) => {
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].field, "message");
            assert_eq!(issues[0].rule, "required");
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_valid_request_converts() {
    let new_contact = request().validate().unwrap();
    assert_eq!(new_contact.last_name, "Bakare");
    assert_matches!(ContactRequest::default().validate(), Err(AppError::Validation(issues)) if issues.len() == 6);
}
