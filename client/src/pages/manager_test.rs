use super::*;

#[test]
fn trainer_creation_error_uses_server_message() {
    let err = ApiError::Status {
        status: 409,
        status_text: "Conflict".to_owned(),
        message: Some("Email already registered".to_owned()),
    };
    assert_eq!(trainer_creation_error(&err), "Error: Email already registered");
}

#[test]
fn trainer_creation_error_falls_back_to_status_text() {
    let err = ApiError::Status { status: 403, status_text: "Forbidden".to_owned(), message: None };
    assert_eq!(trainer_creation_error(&err), "Error: Forbidden");
}

#[test]
fn trainer_creation_error_reports_transport_failure() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(trainer_creation_error(&err), "Error: request failed: offline");
}

#[test]
fn trainer_created_message_is_stable() {
    assert_eq!(TRAINER_CREATED, "Personal Trainer created successfully!");
}
