//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the route guard on every navigation into a guarded page and
//! read by pages that need the signed-in user's claims (name, user id).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{Claims, GuardState};

/// Authentication state tracking the last guard decision.
///
/// Provided to the component tree as an `RwSignal<AuthState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub guard: GuardState,
}

impl AuthState {
    /// Claims of the authorized session, if the last check passed.
    #[must_use]
    pub fn claims(&self) -> Option<&Claims> {
        self.guard.claims()
    }

    /// Display name of the signed-in user, empty when unknown.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.claims().map(|c| c.name.clone()).unwrap_or_default()
    }

    /// Numeric user id of the signed-in user.
    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.claims().and_then(Claims::numeric_user_id)
    }
}
