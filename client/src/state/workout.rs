//! Workout-program drafting and list filtering.
//!
//! DESIGN
//! ======
//! The create-workout page keeps one `WorkoutDraft`; exercises are staged in
//! an `ExerciseDraft` and appended only once they are complete. Building the
//! request is the single validation point, so a draft without a selected
//! client never produces a request body.

#[cfg(test)]
#[path = "workout_test.rs"]
mod workout_test;

use crate::net::types::{ClientSummary, NewExercise, NewWorkoutProgram, WorkoutProgram};

pub const UNKNOWN_CLIENT: &str = "Unknown Client";

/// Why a workout draft cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorkoutFormError {
    #[error("Please select a client")]
    NoClient,
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("Unable to determine your trainer account. Please sign in again.")]
    NoTrainer,
}

/// Exercise being typed into the add-exercise fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub name: String,
    pub description: String,
    pub sets: u32,
    pub repetitions: u32,
    pub time: String,
}

impl ExerciseDraft {
    /// Named, and either counted in repetitions or timed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && (self.repetitions > 0 || !self.time.trim().is_empty())
    }

    fn to_request(&self, personal_trainer_id: i64) -> NewExercise {
        NewExercise {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            sets: self.sets,
            repetitions: self.repetitions,
            time: self.time.trim().to_owned(),
            personal_trainer_id,
        }
    }
}

/// Whole create-workout form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkoutDraft {
    pub name: String,
    pub description: String,
    pub client_id: Option<i64>,
    pub exercises: Vec<ExerciseDraft>,
}

impl WorkoutDraft {
    /// Append `exercise` if complete. Returns whether it was added.
    pub fn add_exercise(&mut self, exercise: ExerciseDraft) -> bool {
        if !exercise.is_complete() {
            return false;
        }
        self.exercises.push(exercise);
        true
    }

    /// Request body for this draft.
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutFormError::NoClient`] when no client is selected,
    /// before any other check.
    pub fn to_request(&self, personal_trainer_id: Option<i64>) -> Result<NewWorkoutProgram, WorkoutFormError> {
        let client_id = self.client_id.ok_or(WorkoutFormError::NoClient)?;
        if self.name.trim().is_empty() {
            return Err(WorkoutFormError::MissingField("Program Name"));
        }
        if self.description.trim().is_empty() {
            return Err(WorkoutFormError::MissingField("Program Description"));
        }
        let personal_trainer_id = personal_trainer_id.ok_or(WorkoutFormError::NoTrainer)?;
        Ok(NewWorkoutProgram {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            client_id,
            personal_trainer_id,
            exercises: self.exercises.iter().map(|e| e.to_request(personal_trainer_id)).collect(),
        })
    }
}

/// Client filter on the trainer's program list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClientFilter {
    #[default]
    All,
    Client(i64),
}

impl ClientFilter {
    /// Parse a `<select>` value: `"all"` or a client id.
    #[must_use]
    pub fn from_select_value(value: &str) -> Self {
        value.trim().parse().map_or(Self::All, Self::Client)
    }

    #[must_use]
    pub fn select_value(self) -> String {
        match self {
            Self::All => "all".to_owned(),
            Self::Client(id) => id.to_string(),
        }
    }

    #[must_use]
    pub fn matches(self, program: &WorkoutProgram) -> bool {
        match self {
            Self::All => true,
            Self::Client(id) => program.client_id == Some(id),
        }
    }
}

/// Programs visible under `filter`, in server order.
#[must_use]
pub fn filter_programs(programs: &[WorkoutProgram], filter: ClientFilter) -> Vec<WorkoutProgram> {
    programs.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// Display name of the program owner.
#[must_use]
pub fn client_name(clients: &[ClientSummary], client_id: Option<i64>) -> String {
    client_id
        .and_then(|id| clients.iter().find(|c| c.user_id == id))
        .map_or_else(|| UNKNOWN_CLIENT.to_owned(), ClientSummary::full_name)
}

/// `"1 exercise"`, `"3 exercises"`.
#[must_use]
pub fn exercise_count_label(count: usize) -> String {
    if count == 1 { "1 exercise".to_owned() } else { format!("{count} exercises") }
}

/// Parse a numeric form field, treating blank or invalid input as zero.
#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}
