//! Wire DTOs for the fitness-center REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Optional fields default so a
//! sparse server record still renders instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use session::Role;

/// Body of `POST /api/Users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/Users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub jwt: String,
}

/// Body of `POST /api/Users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub account_type: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_trainer_id: Option<i64>,
}

/// A client record from `GET /api/Users/Clients`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub user_id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl ClientSummary {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// One exercise inside a workout program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub repetitions: u32,
    /// Free-text duration such as `"30 seconds"`. Numeric values are kept
    /// as their decimal text.
    #[serde(default, deserialize_with = "deserialize_time")]
    pub time: Option<String>,
}

impl Exercise {
    /// Duration text, if the exercise is timed.
    #[must_use]
    pub fn time_label(&self) -> Option<&str> {
        self.time.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// A stored workout program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgram {
    pub workout_program_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub personal_trainer_id: Option<i64>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// Exercise as submitted with a new program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    pub description: String,
    pub sets: u32,
    pub repetitions: u32,
    pub time: String,
    pub personal_trainer_id: i64,
}

/// Body of `POST /api/WorkoutPrograms`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutProgram {
    pub name: String,
    pub description: String,
    pub client_id: i64,
    pub personal_trainer_id: i64,
    pub exercises: Vec<NewExercise>,
}

/// Error body the API returns on some failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) if n.as_i64() == Some(0) => Ok(None),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected exercise time as text or number")),
    }
}
