//! Login page exchanging email + password for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is stored before it is decoded; the decoded role then picks the
//! landing page. Pages reached afterwards re-validate through their guard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;

const MISSING_INPUT: &str = "Enter both email and password.";
#[cfg(any(test, feature = "hydrate"))]
const INVALID_ROLE: &str = "Invalid role detected. Please contact support.";
#[cfg(any(test, feature = "hydrate"))]
const UNREADABLE_TOKEN: &str = "Unable to retrieve user information. Please try again.";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_REJECTED: &str = "Failed to login. Please try again.";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_REQUEST_FAILED: &str = "Login request failed. Please try again.";

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_INPUT);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Landing route for a freshly issued token, or the inline error to show.
#[cfg(any(test, feature = "hydrate"))]
fn login_destination(jwt: &str) -> Result<&'static str, &'static str> {
    let claims = session::decode_claims(jwt).ok_or(UNREADABLE_TOKEN)?;
    claims.role().map(session::Role::home_path).ok_or(INVALID_ROLE)
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => err.server_message().unwrap_or(LOGIN_REJECTED).to_owned(),
        _ => LOGIN_REQUEST_FAILED.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use session::SessionStore as _;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(resp) => {
                        crate::util::cookie_session::CookieSession.store(&resp.jwt);
                        match login_destination(&resp.jwt) {
                            Ok(path) => navigate(path, NavigateOptions::default()),
                            Err(msg) => error.set(msg.to_owned()),
                        }
                    }
                    Err(e) => {
                        log::error!("login failed: {e}");
                        error.set(login_failure_message(&e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <a class="login-page__back" href="/">
                "\u{2190} Back"
            </a>
            <div class="login-card">
                <h1>"Fitness Center"</h1>
                <h2 class="login-card__subtitle">"Welcome Back"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="Enter your email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
