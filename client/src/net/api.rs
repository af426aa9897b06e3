//! REST API helpers for the fitness-center backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages turn errors into static
//! messages. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};

#[cfg(feature = "hydrate")]
use super::types::ErrorBody;
use super::types::{ClientSummary, CreateUserRequest, LoginResponse, NewWorkoutProgram, WorkoutProgram};
#[cfg(feature = "hydrate")]
use super::types::LoginRequest;

/// Backend used when no `FITNESS_API_BASE_URL` is set at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://swafe24fitness.azurewebsites.net";

pub const LOGIN_PATH: &str = "/api/Users/login";
pub const USERS_PATH: &str = "/api/Users";
pub const CLIENTS_PATH: &str = "/api/Users/Clients";
pub const WORKOUT_PROGRAMS_PATH: &str = "/api/WorkoutPrograms";
pub const TRAINER_WORKOUT_PROGRAMS_PATH: &str = "/api/WorkoutPrograms/trainer";

/// Failure of a REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded {status}")]
    Status { status: u16, status_text: String, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided message for status failures.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Server message, falling back to the HTTP status text.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Status { status_text, .. } => {
                self.server_message().map_or_else(|| status_text.clone(), str::to_owned)
            }
            other => other.to_string(),
        }
    }
}

/// Base URL with any trailing slash removed.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("FITNESS_API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn endpoint(path: &str) -> String {
    endpoint_url(api_base_url(), path)
}

#[cfg(feature = "hydrate")]
fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: &Response) -> ApiError {
    let message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.message);
    ApiError::Status { status: resp.status(), status_text: resp.status_text(), message }
}

#[cfg(feature = "hydrate")]
async fn get_list<T: serde::de::DeserializeOwned>(path: &str, token: Option<&str>) -> Result<Vec<T>, ApiError> {
    let resp = authorized(Request::get(&endpoint(path)), token)
        .send()
        .await
        .map_err(network_error)?;
    if !resp.ok() {
        return Err(status_error(&resp).await);
    }
    resp.json::<Vec<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(path: &str, token: Option<&str>, body: &B) -> Result<Response, ApiError> {
    let resp = authorized(Request::post(&endpoint(path)), token)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    if !resp.ok() {
        return Err(status_error(&resp).await);
    }
    Ok(resp)
}

/// Exchange credentials for a session token via `POST /api/Users/login`.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected, or
/// the response has no `jwt`.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = post_json(LOGIN_PATH, None, &body).await?;
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create a trainer or client account via `POST /api/Users`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the account.
pub async fn create_user(token: Option<&str>, request: &CreateUserRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(USERS_PATH, token, request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

/// List clients via `GET /api/Users/Clients`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a client list.
pub async fn fetch_clients(token: Option<&str>) -> Result<Vec<ClientSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_list(CLIENTS_PATH, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// List the signed-in client's programs via `GET /api/WorkoutPrograms`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a program list.
pub async fn fetch_workout_programs(token: Option<&str>) -> Result<Vec<WorkoutProgram>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_list(WORKOUT_PROGRAMS_PATH, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// List the signed-in trainer's programs via `GET /api/WorkoutPrograms/trainer`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a program list.
pub async fn fetch_trainer_workout_programs(token: Option<&str>) -> Result<Vec<WorkoutProgram>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_list(TRAINER_WORKOUT_PROGRAMS_PATH, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Create a workout program via `POST /api/WorkoutPrograms`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the program.
pub async fn create_workout_program(token: Option<&str>, program: &NewWorkoutProgram) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(WORKOUT_PROGRAMS_PATH, token, program).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, program);
        Err(ApiError::Unavailable)
    }
}
