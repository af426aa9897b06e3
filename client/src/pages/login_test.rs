use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use session::Role;

fn jwt_for(role: &str) -> String {
    let payload = serde_json::json!({
        "Name": "Kim",
        "Role": role,
        "UserId": "5",
        "GroupId": "1",
        "exp": "4102444800"
    });
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

// =============================================================
// validate_login_input
// =============================================================

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  kim@example.com ", "pw"),
        Ok(("kim@example.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err(MISSING_INPUT));
    assert_eq!(validate_login_input("kim@example.com", ""), Err(MISSING_INPUT));
}

// =============================================================
// login_destination
// =============================================================

#[test]
fn client_token_routes_to_client_page() {
    assert_eq!(login_destination(&jwt_for("Client")), Ok("/client/clientpage"));
}

#[test]
fn every_role_routes_to_its_home() {
    for role in [Role::Manager, Role::PersonalTrainer, Role::Client] {
        assert_eq!(login_destination(&jwt_for(role.as_str())), Ok(role.home_path()));
    }
}

#[test]
fn unknown_role_reports_invalid_role() {
    assert_eq!(login_destination(&jwt_for("Owner")), Err(INVALID_ROLE));
}

#[test]
fn undecodable_token_reports_unreadable() {
    assert_eq!(login_destination("not-a-jwt"), Err(UNREADABLE_TOKEN));
}

// =============================================================
// login_failure_message
// =============================================================

#[test]
fn rejected_login_prefers_server_message() {
    let err = ApiError::Status {
        status: 401,
        status_text: "Unauthorized".to_owned(),
        message: Some("Invalid credentials".to_owned()),
    };
    assert_eq!(login_failure_message(&err), "Invalid credentials");
}

#[test]
fn rejected_login_without_message_uses_default() {
    let err = ApiError::Status { status: 401, status_text: "Unauthorized".to_owned(), message: None };
    assert_eq!(login_failure_message(&err), LOGIN_REJECTED);
}

#[test]
fn transport_failure_uses_request_failed_message() {
    let err = ApiError::Network("Failed to fetch".to_owned());
    assert_eq!(login_failure_message(&err), LOGIN_REQUEST_FAILED);
}
