use super::*;
use session::{DenyReason, Redirect};

fn authorized_state() -> AuthState {
    let claims: Claims = serde_json::from_value(serde_json::json!({
        "Name": "Rowan",
        "Role": "PersonalTrainer",
        "UserId": "12",
        "GroupId": "2",
        "exp": "1900000000"
    }))
    .expect("claims");
    AuthState { guard: GuardState::Authorized(claims) }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_unchecked() {
    let state = AuthState::default();
    assert_eq!(state.guard, GuardState::Unchecked);
    assert!(state.claims().is_none());
}

#[test]
fn auth_state_default_has_no_identity() {
    let state = AuthState::default();
    assert_eq!(state.display_name(), "");
    assert_eq!(state.user_id(), None);
}

// =============================================================
// Authorized session
// =============================================================

#[test]
fn authorized_state_exposes_name_and_id() {
    let state = authorized_state();
    assert_eq!(state.display_name(), "Rowan");
    assert_eq!(state.user_id(), Some(12));
}

#[test]
fn redirecting_state_hides_claims() {
    let state = AuthState {
        guard: GuardState::Redirecting(Redirect {
            to: session::LOGIN_PATH,
            reason: DenyReason::MissingToken,
            session_cleared: false,
        }),
    };
    assert!(state.claims().is_none());
    assert_eq!(state.user_id(), None);
}
