//! Manager dashboard for creating personal-trainer accounts.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use leptos::prelude::*;
use session::Role;

use crate::components::nav_bar::NavBar;
use crate::components::require_role::RequireRole;
use crate::components::user_form_fields::UserFormFields;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::state::user_form::UserForm;

#[cfg(any(test, feature = "hydrate"))]
const TRAINER_CREATED: &str = "Personal Trainer created successfully!";

#[cfg(any(test, feature = "hydrate"))]
fn trainer_creation_error(err: &ApiError) -> String {
    format!("Error: {}", err.detail())
}

/// Route entry: manager-only.
#[component]
pub fn ManagerPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Manager>
            <ManagerDashboard/>
        </RequireRole>
    }
}

#[component]
fn ManagerDashboard() -> impl IntoView {
    let form = RwSignal::new(UserForm::default());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(|f| f.to_request(Role::PersonalTrainer, None)) {
            Ok(request) => request,
            Err(msg) => {
                message.set(String::new());
                error.set(msg);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = crate::util::cookie_session::session_token();
            match crate::net::api::create_user(token.as_deref(), &request).await {
                Ok(()) => {
                    message.set(TRAINER_CREATED.to_owned());
                    error.set(String::new());
                    form.set(UserForm::default());
                }
                Err(e) => {
                    log::error!("create trainer failed: {e}");
                    message.set(String::new());
                    error.set(trainer_creation_error(&e));
                }
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="manager-page">
            <NavBar brand="Manager Dashboard"/>
            <div class="manager-page__content">
                <div class="form-card">
                    <h2>"Create Personal Trainer"</h2>
                    <Show when=move || !message.get().is_empty()>
                        <p class="form-card__success">{move || message.get()}</p>
                    </Show>
                    <Show when=move || !error.get().is_empty()>
                        <p class="form-card__error">{move || error.get()}</p>
                    </Show>
                    <form on:submit=on_submit>
                        <UserFormFields form=form/>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Create Personal Trainer"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
