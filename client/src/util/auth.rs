//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and navigation bars apply identical redirect and logout
//! behavior through these helpers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{GuardState, LOGIN_PATH, Role, RouteGuard, SessionStore};

use crate::state::auth::AuthState;
use crate::util::clock::now_secs;
use crate::util::cookie_session::CookieSession;

/// Run the route guard for `role` whenever `pathname` changes and redirect
/// on denial.
///
/// `guard` belongs to one guarded page instance and is what gates its
/// rendering. `auth` is the app-wide copy read by pages that need claims;
/// it is written before `guard` so a page that becomes visible already sees
/// the fresh claims.
pub fn install_route_guard<F>(
    guard: RwSignal<GuardState>,
    auth: RwSignal<AuthState>,
    role: Role,
    pathname: Memo<String>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        pathname.track();
        guard.set(GuardState::Checking);
        let state = check_navigation(&CookieSession, role, now_secs());
        if let Some(target) = redirect_target(&state) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        auth.set(AuthState { guard: state.clone() });
        guard.set(state);
    });
}

/// Guard decision for one navigation into a page requiring `role`.
pub fn check_navigation<S: SessionStore + ?Sized>(store: &S, role: Role, now_secs: i64) -> GuardState {
    RouteGuard::new(role).navigate(store, now_secs).clone()
}

/// Whether a page requiring `role` may render under `state`.
pub fn page_visible(state: &GuardState, role: Role) -> bool {
    state.grants(role)
}

/// Path to navigate to for a resolved guard state.
pub fn redirect_target(state: &GuardState) -> Option<&'static str> {
    state.redirect().map(|redirect| redirect.to)
}

/// Drop the stored session and return where to send the user.
pub fn logout<S: SessionStore + ?Sized>(store: &S) -> &'static str {
    store.clear();
    LOGIN_PATH
}
