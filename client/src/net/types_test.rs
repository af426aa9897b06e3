use super::*;

// =============================================================
// Requests
// =============================================================

#[test]
fn create_user_request_uses_camel_case_and_role_spelling() {
    let req = CreateUserRequest {
        first_name: "Lee".to_owned(),
        last_name: "Park".to_owned(),
        email: "lee@example.com".to_owned(),
        password: "pw".to_owned(),
        account_type: Role::PersonalTrainer,
        personal_trainer_id: None,
    };
    assert_eq!(
        serde_json::to_value(&req).expect("serialize"),
        serde_json::json!({
            "firstName": "Lee",
            "lastName": "Park",
            "email": "lee@example.com",
            "password": "pw",
            "accountType": "PersonalTrainer"
        })
    );
}

#[test]
fn create_user_request_includes_trainer_id_for_clients() {
    let req = CreateUserRequest {
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: "a@b.c".to_owned(),
        password: "pw".to_owned(),
        account_type: Role::Client,
        personal_trainer_id: Some(7),
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value["accountType"], "Client");
    assert_eq!(value["personalTrainerId"], 7);
}

#[test]
fn new_workout_program_serializes_nested_exercises() {
    let program = NewWorkoutProgram {
        name: "Strength".to_owned(),
        description: "Base block".to_owned(),
        client_id: 4,
        personal_trainer_id: 2,
        exercises: vec![NewExercise {
            name: "Squat".to_owned(),
            description: "Back squat".to_owned(),
            sets: 5,
            repetitions: 5,
            time: String::new(),
            personal_trainer_id: 2,
        }],
    };
    let value = serde_json::to_value(&program).expect("serialize");
    assert_eq!(value["clientId"], 4);
    assert_eq!(value["personalTrainerId"], 2);
    assert_eq!(value["exercises"][0]["repetitions"], 5);
    assert_eq!(value["exercises"][0]["personalTrainerId"], 2);
}

// =============================================================
// Responses
// =============================================================

#[test]
fn client_summary_full_name_joins_and_trims() {
    let client: ClientSummary =
        serde_json::from_value(serde_json::json!({ "userId": 3, "firstName": "Mia", "lastName": "" }))
            .expect("deserialize");
    assert_eq!(client.full_name(), "Mia");
    assert_eq!(client.email, "");
}

#[test]
fn workout_program_tolerates_sparse_records() {
    let program: WorkoutProgram =
        serde_json::from_value(serde_json::json!({ "workoutProgramId": 1, "name": "Cardio" }))
            .expect("deserialize");
    assert_eq!(program.client_id, None);
    assert!(program.exercises.is_empty());
}

#[test]
fn exercise_time_accepts_text_or_number() {
    let text: Exercise =
        serde_json::from_value(serde_json::json!({ "name": "Plank", "time": "60 seconds" })).expect("text");
    assert_eq!(text.time_label(), Some("60 seconds"));

    let number: Exercise = serde_json::from_value(serde_json::json!({ "name": "Row", "time": 90 })).expect("number");
    assert_eq!(number.time_label(), Some("90"));

    let zero: Exercise = serde_json::from_value(serde_json::json!({ "name": "Curl", "time": 0 })).expect("zero");
    assert_eq!(zero.time_label(), None);

    let blank: Exercise = serde_json::from_value(serde_json::json!({ "name": "Dip", "time": "  " })).expect("blank");
    assert_eq!(blank.time_label(), None);
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(body.message, None);
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Email taken"}"#).expect("deserialize");
    assert_eq!(body.message.as_deref(), Some("Email taken"));
}
