//! Personal-trainer pages.
//!
//! Every page here is wrapped in `RequireRole` for `PersonalTrainer` and
//! carries the shared trainer navigation bar.

pub mod create_client;
pub mod create_workout;
pub mod home;
pub mod see_clients;
pub mod see_workouts;

/// Pause between a successful create and the follow-up navigation.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_secs(2);
