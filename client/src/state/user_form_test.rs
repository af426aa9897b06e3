use super::*;

fn filled() -> UserForm {
    UserForm {
        first_name: " Jo ".to_owned(),
        last_name: "Reyes".to_owned(),
        email: "jo@example.com ".to_owned(),
        password: " secret ".to_owned(),
    }
}

#[test]
fn default_form_reports_first_missing_field() {
    assert_eq!(UserForm::default().missing_field(), Some("First Name"));
}

#[test]
fn whitespace_only_counts_as_missing() {
    let form = UserForm { email: "   ".to_owned(), ..filled() };
    assert_eq!(form.missing_field(), Some("Email"));
    assert_eq!(form.to_request(Role::Client, Some(1)), Err("Email is required.".to_owned()));
}

#[test]
fn trainer_request_has_no_trainer_id() {
    let req = filled().to_request(Role::PersonalTrainer, None).expect("request");
    assert_eq!(req.account_type, Role::PersonalTrainer);
    assert_eq!(req.personal_trainer_id, None);
    assert_eq!(req.first_name, "Jo");
    assert_eq!(req.email, "jo@example.com");
}

#[test]
fn password_is_sent_verbatim() {
    let req = filled().to_request(Role::Client, Some(4)).expect("request");
    assert_eq!(req.password, " secret ");
    assert_eq!(req.personal_trainer_id, Some(4));
}
