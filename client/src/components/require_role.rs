//! Role guard wrapper for route-level pages.
//!
//! DESIGN
//! ======
//! The wrapped page is rendered only while this instance's own guard state
//! is `Authorized` for the required role. Each mount starts `Unchecked`, so
//! a decision left in the shared `AuthState` by an earlier page never opens
//! this one. The check re-runs on each navigation (pathname change), not on
//! a timer.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use session::{GuardState, Role};

use crate::state::auth::AuthState;
use crate::util::auth::{install_route_guard, page_visible};

/// Render `children` only for an unexpired session holding `role`;
/// otherwise redirect to `/login`.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = RwSignal::new(GuardState::Unchecked);
    let location = use_location();
    install_route_guard(guard, auth, role, location.pathname, use_navigate());

    view! {
        <Show
            when=move || guard.with(|state| page_visible(state, role))
            fallback=|| view! { <div class="guard-pending" aria-busy="true"></div> }
        >
            {children()}
        </Show>
    }
}
