//! Trainer form for building a workout program for one client.
//!
//! DESIGN
//! ======
//! The client list is fetched once on mount; its failure replaces the form
//! with a status panel. Form problems (no client selected, blank fields)
//! are shown inline and never reach the network.

#[cfg(test)]
#[path = "create_workout_test.rs"]
mod create_workout_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use session::Role;

use crate::components::nav_bar::TrainerNavBar;
use crate::components::require_role::RequireRole;
use crate::components::status_panel::list_status;
use crate::net::types::ClientSummary;
use crate::state::auth::AuthState;
use crate::state::load::{ListMessages, ListState};
use crate::state::workout::{ExerciseDraft, WorkoutDraft, parse_count};
use crate::util::cookie_session::session_token;

const CLIENT_OPTIONS: ListMessages = ListMessages {
    loading: "Loading clients...",
    failed: "Failed to load clients",
    empty: "No clients found. Please add clients first.",
};

#[cfg(any(test, feature = "hydrate"))]
const WORKOUT_CREATED: &str = "Workout program created successfully!";
#[cfg(any(test, feature = "hydrate"))]
const WORKOUT_CREATE_FAILED: &str = "Failed to create workout program";
#[cfg(feature = "hydrate")]
const WORKOUT_LIST_PATH: &str = "/trainer/see-workouts";

/// Selected client id from the `<select>` value; blank means none.
fn selected_client(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// One-line summary of a staged exercise.
fn exercise_summary(exercise: &ExerciseDraft) -> String {
    let mut parts = vec![format!("{} sets", exercise.sets)];
    if exercise.repetitions > 0 {
        parts.push(format!("{} reps", exercise.repetitions));
    }
    let time = exercise.time.trim();
    if !time.is_empty() {
        parts.push(time.to_owned());
    }
    format!("{} ({})", exercise.name.trim(), parts.join(", "))
}

#[component]
pub fn CreateWorkoutPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::PersonalTrainer>
            <CreateWorkout/>
        </RequireRole>
    }
}

#[component]
fn CreateWorkout() -> impl IntoView {
    let clients = LocalResource::new(|| async move {
        let token = session_token();
        crate::net::api::fetch_clients(token.as_deref()).await
    });

    view! {
        <div class="trainer-page">
            <TrainerNavBar/>
            <div class="trainer-page__content">
                <h1>"Create Workout Program"</h1>
                {move || {
                    let state = ListState::from_fetch(clients.get(), "clients");
                    if let Some(status) = list_status(&state, CLIENT_OPTIONS) {
                        return status;
                    }
                    view! { <WorkoutForm clients=state.items().to_vec()/> }.into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn WorkoutForm(clients: Vec<ClientSummary>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let draft = RwSignal::new(WorkoutDraft::default());
    let exercise = RwSignal::new(ExerciseDraft::default());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_add_exercise = move |_| {
        let staged = exercise.get();
        if draft.try_update(|d| d.add_exercise(staged)).unwrap_or(false) {
            exercise.set(ExerciseDraft::default());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        message.set(String::new());
        error.set(String::new());
        let trainer_id = auth.with(AuthState::user_id);
        let request = match draft.with(|d| d.to_request(trainer_id)) {
            Ok(request) => request,
            Err(e) => {
                error.set(e.to_string());
                return;
            }
        };
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let token = session_token();
                match crate::net::api::create_workout_program(token.as_deref(), &request).await {
                    Ok(()) => {
                        message.set(WORKOUT_CREATED.to_owned());
                        draft.set(WorkoutDraft::default());
                        gloo_timers::future::sleep(super::REDIRECT_DELAY).await;
                        navigate(WORKOUT_LIST_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("create workout program failed: {e}");
                        error.set(WORKOUT_CREATE_FAILED.to_owned());
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
        <div class="form-card">
            <Show when=move || !message.get().is_empty()>
                <p class="form-card__success">{move || message.get()}</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="form-card__error">{move || error.get()}</p>
            </Show>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="client">"Client"</label>
                    <select
                        id="client"
                        prop:value=move || draft.with(|d| d.client_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| draft.update(|d| d.client_id = selected_client(&event_target_value(&ev)))
                    >
                        <option value="">"Select a client"</option>
                        {clients
                            .into_iter()
                            .map(|client| {
                                view! { <option value=client.user_id.to_string()>{client.full_name()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="programName">"Program Name"</label>
                    <input
                        id="programName"
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="programDescription">"Program Description"</label>
                    <textarea
                        id="programDescription"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <fieldset class="exercise-draft">
                    <legend>"Add Exercise"</legend>
                    <input
                        type="text"
                        placeholder="Exercise Name"
                        prop:value=move || exercise.with(|e| e.name.clone())
                        on:input=move |ev| exercise.update(|e| e.name = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Description"
                        prop:value=move || exercise.with(|e| e.description.clone())
                        on:input=move |ev| exercise.update(|e| e.description = event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        placeholder="Sets"
                        prop:value=move || exercise.with(|e| e.sets.to_string())
                        on:input=move |ev| exercise.update(|e| e.sets = parse_count(&event_target_value(&ev)))
                    />
                    <input
                        type="number"
                        min="0"
                        placeholder="Repetitions"
                        prop:value=move || exercise.with(|e| e.repetitions.to_string())
                        on:input=move |ev| exercise.update(|e| e.repetitions = parse_count(&event_target_value(&ev)))
                    />
                    <input
                        type="text"
                        placeholder="Time (e.g. 30 seconds)"
                        prop:value=move || exercise.with(|e| e.time.clone())
                        on:input=move |ev| exercise.update(|e| e.time = event_target_value(&ev))
                    />
                    <button
                        class="btn"
                        type="button"
                        disabled=move || !exercise.with(ExerciseDraft::is_complete)
                        on:click=on_add_exercise
                    >
                        "Add Exercise"
                    </button>
                </fieldset>

                <ul class="exercise-draft__list">
                    {move || {
                        draft
                            .with(|d| d.exercises.iter().map(exercise_summary).collect::<Vec<_>>())
                            .into_iter()
                            .map(|summary| view! { <li>{summary}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating..." } else { "Create Workout Program" }}
                </button>
            </form>
        </div>
    }
}
