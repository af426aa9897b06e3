//! Trainer's client list.

use leptos::prelude::*;
use session::Role;

use crate::components::nav_bar::TrainerNavBar;
use crate::components::require_role::RequireRole;
use crate::components::status_panel::list_status;
use crate::state::load::{ListMessages, ListState};
use crate::util::cookie_session::session_token;

const CLIENT_LIST: ListMessages = ListMessages {
    loading: "Loading clients...",
    failed: "Failed to load clients",
    empty: "No clients found.",
};

#[component]
pub fn SeeClientsPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::PersonalTrainer>
            <ClientList/>
        </RequireRole>
    }
}

#[component]
fn ClientList() -> impl IntoView {
    let clients = LocalResource::new(|| async move {
        let token = session_token();
        crate::net::api::fetch_clients(token.as_deref()).await
    });

    view! {
        <div class="trainer-page">
            <TrainerNavBar/>
            <div class="trainer-page__content">
                <h1>"My Clients"</h1>
                {move || {
                    let state = ListState::from_fetch(clients.get(), "clients");
                    if let Some(status) = list_status(&state, CLIENT_LIST) {
                        return status;
                    }
                    view! {
                        <div class="client-list">
                            {state
                                .items()
                                .iter()
                                .map(|client| {
                                    view! {
                                        <div class="client-card">
                                            <h3>{client.full_name()}</h3>
                                            <p>{client.email.clone()}</p>
                                        </div>
                                    }
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
