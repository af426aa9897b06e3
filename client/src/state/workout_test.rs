use super::*;
use crate::net::types::Exercise;

fn squat() -> ExerciseDraft {
    ExerciseDraft {
        name: "Squat".to_owned(),
        description: "Back squat".to_owned(),
        sets: 5,
        repetitions: 5,
        time: String::new(),
    }
}

fn draft() -> WorkoutDraft {
    WorkoutDraft {
        name: "Strength".to_owned(),
        description: "Base block".to_owned(),
        client_id: Some(4),
        exercises: vec![squat()],
    }
}

fn program(id: i64, client_id: Option<i64>) -> WorkoutProgram {
    WorkoutProgram {
        workout_program_id: id,
        name: format!("P{id}"),
        description: String::new(),
        client_id,
        personal_trainer_id: Some(2),
        exercises: vec![Exercise {
            exercise_id: Some(1),
            name: "Run".to_owned(),
            description: String::new(),
            sets: 1,
            repetitions: 0,
            time: Some("20 minutes".to_owned()),
        }],
    }
}

fn client(id: i64, first: &str, last: &str) -> ClientSummary {
    ClientSummary { user_id: id, first_name: first.to_owned(), last_name: last.to_owned(), email: String::new() }
}

// =============================================================
// ExerciseDraft / add_exercise
// =============================================================

#[test]
fn exercise_needs_name() {
    let exercise = ExerciseDraft { name: "  ".to_owned(), ..squat() };
    assert!(!exercise.is_complete());
}

#[test]
fn exercise_needs_repetitions_or_time() {
    let exercise = ExerciseDraft { repetitions: 0, time: String::new(), ..squat() };
    assert!(!exercise.is_complete());
    let timed = ExerciseDraft { repetitions: 0, time: "30 seconds".to_owned(), ..squat() };
    assert!(timed.is_complete());
}

#[test]
fn add_exercise_skips_incomplete() {
    let mut workout = WorkoutDraft::default();
    assert!(!workout.add_exercise(ExerciseDraft::default()));
    assert!(workout.add_exercise(squat()));
    assert_eq!(workout.exercises.len(), 1);
}

// =============================================================
// to_request
// =============================================================

#[test]
fn submit_without_client_is_blocked() {
    let workout = WorkoutDraft { client_id: None, ..draft() };
    let err = workout.to_request(Some(2)).expect_err("must be blocked");
    assert_eq!(err, WorkoutFormError::NoClient);
    assert_eq!(err.to_string(), "Please select a client");
}

#[test]
fn missing_client_is_reported_before_other_fields() {
    let workout = WorkoutDraft::default();
    assert_eq!(workout.to_request(None), Err(WorkoutFormError::NoClient));
}

#[test]
fn blank_name_is_reported() {
    let workout = WorkoutDraft { name: " ".to_owned(), ..draft() };
    assert_eq!(workout.to_request(Some(2)), Err(WorkoutFormError::MissingField("Program Name")));
}

#[test]
fn missing_trainer_id_is_reported() {
    assert_eq!(draft().to_request(None), Err(WorkoutFormError::NoTrainer));
}

#[test]
fn request_stamps_trainer_on_every_exercise() {
    let req = draft().to_request(Some(2)).expect("request");
    assert_eq!(req.client_id, 4);
    assert_eq!(req.personal_trainer_id, 2);
    assert_eq!(req.exercises.len(), 1);
    assert_eq!(req.exercises[0].personal_trainer_id, 2);
    assert_eq!(req.exercises[0].name, "Squat");
}

// =============================================================
// ClientFilter / listing helpers
// =============================================================

#[test]
fn client_filter_parses_select_values() {
    assert_eq!(ClientFilter::from_select_value("all"), ClientFilter::All);
    assert_eq!(ClientFilter::from_select_value("12"), ClientFilter::Client(12));
    assert_eq!(ClientFilter::from_select_value(""), ClientFilter::All);
    assert_eq!(ClientFilter::Client(12).select_value(), "12");
    assert_eq!(ClientFilter::All.select_value(), "all");
}

#[test]
fn filter_programs_by_client() {
    let programs = vec![program(1, Some(4)), program(2, Some(5)), program(3, None)];
    assert_eq!(filter_programs(&programs, ClientFilter::All).len(), 3);
    let only_four = filter_programs(&programs, ClientFilter::Client(4));
    assert_eq!(only_four.len(), 1);
    assert_eq!(only_four[0].workout_program_id, 1);
    assert!(filter_programs(&programs, ClientFilter::Client(99)).is_empty());
}

#[test]
fn client_name_falls_back_to_unknown() {
    let clients = vec![client(4, "Ana", "Lind")];
    assert_eq!(client_name(&clients, Some(4)), "Ana Lind");
    assert_eq!(client_name(&clients, Some(5)), UNKNOWN_CLIENT);
    assert_eq!(client_name(&clients, None), UNKNOWN_CLIENT);
}

#[test]
fn exercise_count_label_pluralizes() {
    assert_eq!(exercise_count_label(0), "0 exercises");
    assert_eq!(exercise_count_label(1), "1 exercise");
    assert_eq!(exercise_count_label(4), "4 exercises");
}

#[test]
fn parse_count_defaults_to_zero() {
    assert_eq!(parse_count("8"), 8);
    assert_eq!(parse_count(""), 0);
    assert_eq!(parse_count("-3"), 0);
}
