//! Trainer landing page.

use leptos::prelude::*;
use session::Role;

use crate::components::nav_bar::{TRAINER_LINKS, TrainerNavBar};
use crate::components::require_role::RequireRole;
use crate::state::auth::AuthState;

#[component]
pub fn TrainerHomePage() -> impl IntoView {
    view! {
        <RequireRole role=Role::PersonalTrainer>
            <TrainerHome/>
        </RequireRole>
    }
}

#[component]
fn TrainerHome() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || format!("Welcome, {}!", auth.with(AuthState::display_name));

    view! {
        <div class="trainer-page">
            <TrainerNavBar/>
            <div class="trainer-page__content">
                <h1>{greeting}</h1>
                <p>"Manage your clients and their workout programs."</p>
                <div class="trainer-page__actions">
                    {TRAINER_LINKS
                        .iter()
                        .skip(1)
                        .map(|(href, label)| {
                            view! {
                                <a class="action-card" href=*href>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
