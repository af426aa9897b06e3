use super::*;

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(
        endpoint_url("https://api.example.test", CLIENTS_PATH),
        "https://api.example.test/api/Users/Clients"
    );
}

#[test]
fn endpoint_url_drops_trailing_slash_on_base() {
    assert_eq!(endpoint_url("https://api.example.test/", LOGIN_PATH), "https://api.example.test/api/Users/login");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
    assert!(api_base_url().starts_with("http"));
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("h.p.s"), "Bearer h.p.s");
}

#[test]
fn status_error_detail_prefers_server_message() {
    let err = ApiError::Status {
        status: 400,
        status_text: "Bad Request".to_owned(),
        message: Some("Email already in use".to_owned()),
    };
    assert_eq!(err.server_message(), Some("Email already in use"));
    assert_eq!(err.detail(), "Email already in use");
    assert_eq!(err.to_string(), "server responded 400");
}

#[test]
fn status_error_detail_falls_back_to_status_text() {
    let err = ApiError::Status { status: 500, status_text: "Internal Server Error".to_owned(), message: Some(String::new()) };
    assert_eq!(err.server_message(), None);
    assert_eq!(err.detail(), "Internal Server Error");
}

#[test]
fn network_error_detail_is_display_text() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.server_message(), None);
    assert_eq!(err.detail(), "request failed: connection refused");
}

