//! Client view of their assigned workout programs.

use leptos::prelude::*;
use session::Role;

use crate::components::nav_bar::NavBar;
use crate::components::program_card::{ProgramCard, ProgramDetail};
use crate::components::require_role::RequireRole;
use crate::components::status_panel::list_status;
use crate::net::types::WorkoutProgram;
use crate::state::load::{ListMessages, ListState};
use crate::util::cookie_session::session_token;

const PROGRAM_LIST: ListMessages = ListMessages {
    loading: "Loading workout programs...",
    failed: "Failed to load workout programs",
    empty: "No workout programs found.",
};

#[component]
pub fn ClientPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Client>
            <ClientPrograms/>
        </RequireRole>
    }
}

#[component]
fn ClientPrograms() -> impl IntoView {
    let programs = LocalResource::new(|| async move {
        let token = session_token();
        crate::net::api::fetch_workout_programs(token.as_deref()).await
    });
    let selected = RwSignal::new(None::<WorkoutProgram>);
    let on_select = Callback::new(move |program: WorkoutProgram| selected.set(Some(program)));
    let on_back = Callback::new(move |()| selected.set(None));

    view! {
        <div class="client-page">
            <NavBar brand="My Programs"/>
            <div class="client-page__content">
                {move || {
                    if let Some(program) = selected.get() {
                        return view! { <ProgramDetail program=program on_back=on_back/> }.into_any();
                    }
                    let state = ListState::from_fetch(programs.get(), "workout programs");
                    if let Some(status) = list_status(&state, PROGRAM_LIST) {
                        return status;
                    }
                    view! {
                        <h1>"My Workout Programs"</h1>
                        <div class="program-grid">
                            {state
                                .items()
                                .iter()
                                .cloned()
                                .map(|program| view! { <ProgramCard program=program on_select=on_select/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
