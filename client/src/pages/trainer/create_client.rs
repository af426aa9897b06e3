//! Trainer form for registering a new client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The new account is linked to the signed-in trainer through the `UserId`
//! claim. After a successful create the page shows a confirmation and moves
//! to the client list once `REDIRECT_DELAY` has passed.

#[cfg(test)]
#[path = "create_client_test.rs"]
mod create_client_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use session::Role;

use crate::components::nav_bar::TrainerNavBar;
use crate::components::require_role::RequireRole;
use crate::components::user_form_fields::UserFormFields;
use crate::net::types::CreateUserRequest;
use crate::state::auth::AuthState;
use crate::state::user_form::UserForm;

#[cfg(any(test, feature = "hydrate"))]
const CLIENT_CREATED: &str = "Client created successfully! Redirecting...";
const CLIENT_CREATE_FAILED: &str = "Failed to create client. Please try again.";
#[cfg(feature = "hydrate")]
const CLIENT_LIST_PATH: &str = "/trainer/see-clients";

/// Request for a client owned by `trainer_id`.
fn client_request(form: &UserForm, trainer_id: Option<i64>) -> Result<CreateUserRequest, String> {
    let Some(trainer_id) = trainer_id else {
        return Err(CLIENT_CREATE_FAILED.to_owned());
    };
    form.to_request(Role::Client, Some(trainer_id))
}

#[component]
pub fn CreateClientPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::PersonalTrainer>
            <CreateClientForm/>
        </RequireRole>
    }
}

#[component]
fn CreateClientForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(UserForm::default());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        message.set(String::new());
        error.set(String::new());
        let trainer_id = auth.with(AuthState::user_id);
        let request = match form.with(|f| client_request(f, trainer_id)) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg);
                return;
            }
        };
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let token = crate::util::cookie_session::session_token();
                match crate::net::api::create_user(token.as_deref(), &request).await {
                    Ok(()) => {
                        message.set(CLIENT_CREATED.to_owned());
                        form.set(UserForm::default());
                        gloo_timers::future::sleep(super::REDIRECT_DELAY).await;
                        navigate(CLIENT_LIST_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("create client failed: {e}");
                        error.set(CLIENT_CREATE_FAILED.to_owned());
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            pending.set(false);
        }
    };

    view! {
        <div class="trainer-page">
            <TrainerNavBar/>
            <div class="trainer-page__content">
                <div class="form-card">
                    <h2>"Create New Client"</h2>
                    <Show when=move || !message.get().is_empty()>
                        <p class="form-card__success">{move || message.get()}</p>
                    </Show>
                    <Show when=move || !error.get().is_empty()>
                        <p class="form-card__error">{move || error.get()}</p>
                    </Show>
                    <form on:submit=on_submit>
                        <UserFormFields form=form/>
                        <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                            {move || if pending.get() { "Creating..." } else { "Create Client" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
