//! Top navigation bars with a logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::logout;
use crate::util::cookie_session::CookieSession;

/// Links shown on every trainer page.
pub const TRAINER_LINKS: [(&str, &str); 5] = [
    ("/trainer/trainerpage", "Home"),
    ("/trainer/create-client", "Create Client"),
    ("/trainer/create-workout", "Create Workout"),
    ("/trainer/see-workouts", "Workouts"),
    ("/trainer/see-clients", "Clients"),
];

/// Navigation bar with a brand label, page links, and a logout button.
#[component]
pub fn NavBar(brand: &'static str, #[prop(optional)] links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let target = logout(&CookieSession);
        auth.set(AuthState::default());
        navigate(target, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">{brand}</span>
            <ul class="nav-bar__links">
                {links
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a class="nav-bar__link" href=*href>
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <button class="btn nav-bar__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}

/// Navigation bar shared by the trainer pages.
#[component]
pub fn TrainerNavBar() -> impl IntoView {
    view! { <NavBar brand="Trainer Portal" links=&TRAINER_LINKS/> }
}
