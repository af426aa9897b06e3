//! Trainer's workout programs with a per-client filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Programs and clients are fetched independently. Client names only label
//! the cards, so a failed client fetch is logged and every owner renders as
//! "Unknown Client" while the programs still show.

#[cfg(test)]
#[path = "see_workouts_test.rs"]
mod see_workouts_test;

use leptos::prelude::*;
use session::Role;

use crate::components::nav_bar::TrainerNavBar;
use crate::components::program_card::ExerciseList;
use crate::components::require_role::RequireRole;
use crate::components::status_panel::list_status;
use crate::net::api::ApiError;
use crate::net::types::{ClientSummary, WorkoutProgram};
use crate::state::load::{ListMessages, ListState};
use crate::state::workout::{ClientFilter, client_name, exercise_count_label, filter_programs};
use crate::util::cookie_session::session_token;

const WORKOUT_LIST: ListMessages = ListMessages {
    loading: "Loading workouts...",
    failed: "Failed to load workouts. Please try again.",
    empty: "No workout programs found.",
};

/// Clients usable for labels; a failed or pending fetch yields none.
fn known_clients(fetch: Option<Result<Vec<ClientSummary>, ApiError>>) -> Vec<ClientSummary> {
    match fetch {
        Some(Ok(clients)) => clients,
        Some(Err(e)) => {
            #[cfg(feature = "hydrate")]
            log::error!("failed to load clients: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            Vec::new()
        }
        None => Vec::new(),
    }
}

#[component]
pub fn SeeWorkoutsPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::PersonalTrainer>
            <WorkoutList/>
        </RequireRole>
    }
}

#[component]
fn WorkoutList() -> impl IntoView {
    let programs = LocalResource::new(|| async move {
        let token = session_token();
        crate::net::api::fetch_trainer_workout_programs(token.as_deref()).await
    });
    let clients = LocalResource::new(|| async move {
        let token = session_token();
        crate::net::api::fetch_clients(token.as_deref()).await
    });
    let filter = RwSignal::new(ClientFilter::All);
    let client_list = Memo::new(move |_| known_clients(clients.get()));

    view! {
        <div class="trainer-page">
            <TrainerNavBar/>
            <div class="trainer-page__content">
                <div class="trainer-page__header">
                    <h1>"Workout Programs"</h1>
                    <select
                        class="client-filter"
                        prop:value=move || filter.get().select_value()
                        on:change=move |ev| filter.set(ClientFilter::from_select_value(&event_target_value(&ev)))
                    >
                        <option value="all">"All Clients"</option>
                        {move || {
                            client_list
                                .get()
                                .into_iter()
                                .map(|client| {
                                    view! { <option value=client.user_id.to_string()>{client.full_name()}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
                {move || {
                    let state = ListState::from_fetch(programs.get(), "workout programs");
                    if let Some(status) = list_status(&state, WORKOUT_LIST) {
                        return status;
                    }
                    let clients = client_list.get();
                    view! {
                        <div class="workout-list">
                            {filter_programs(state.items(), filter.get())
                                .into_iter()
                                .map(|program| {
                                    let owner = client_name(&clients, program.client_id);
                                    view! { <TrainerProgramCard program=program owner=owner/> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn TrainerProgramCard(program: WorkoutProgram, owner: String) -> impl IntoView {
    let count = exercise_count_label(program.exercises.len());
    view! {
        <div class="program-card">
            <div class="program-card__header">
                <h2>{program.name}</h2>
                <span class="program-card__count">{count}</span>
            </div>
            <p class="program-card__client">{format!("Client: {owner}")}</p>
            <p class="program-card__description">{program.description}</p>
            <ExerciseList exercises=program.exercises/>
        </div>
    }
}
