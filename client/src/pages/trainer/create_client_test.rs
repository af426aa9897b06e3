use super::*;

fn filled_form() -> UserForm {
    UserForm {
        first_name: "Mia".to_owned(),
        last_name: "Holm".to_owned(),
        email: "mia@example.com".to_owned(),
        password: "secret".to_owned(),
    }
}

#[test]
fn client_request_links_the_signed_in_trainer() {
    let request = client_request(&filled_form(), Some(12)).expect("request");
    assert_eq!(request.account_type, Role::Client);
    assert_eq!(request.personal_trainer_id, Some(12));
    assert_eq!(request.email, "mia@example.com");
}

#[test]
fn client_request_without_trainer_id_fails() {
    assert_eq!(client_request(&filled_form(), None), Err(CLIENT_CREATE_FAILED.to_owned()));
}

#[test]
fn client_request_reports_first_missing_field() {
    let form = UserForm { email: String::new(), ..filled_form() };
    assert_eq!(client_request(&form, Some(1)), Err("Email is required.".to_owned()));
}

#[test]
fn confirmation_mentions_redirect() {
    assert!(CLIENT_CREATED.ends_with("Redirecting..."));
}
