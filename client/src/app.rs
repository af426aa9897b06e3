//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::client::ClientPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::manager::ManagerPage;
use crate::pages::trainer::{
    create_client::CreateClientPage, create_workout::CreateWorkoutPage, home::TrainerHomePage,
    see_clients::SeeClientsPage, see_workouts::SeeWorkoutsPage,
};
use crate::state::auth::AuthState;
use crate::util::cookie_session::CookieSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth state and session store contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(AuthState::default()));
    provide_context(CookieSession);

    view! {
        <Stylesheet id="leptos" href="/pkg/fitness-center.css"/>
        <Title text="Fitness Center"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("manager"), StaticSegment("managerpage")) view=ManagerPage/>
                <Route path=(StaticSegment("trainer"), StaticSegment("trainerpage")) view=TrainerHomePage/>
                <Route path=(StaticSegment("trainer"), StaticSegment("create-client")) view=CreateClientPage/>
                <Route path=(StaticSegment("trainer"), StaticSegment("create-workout")) view=CreateWorkoutPage/>
                <Route path=(StaticSegment("trainer"), StaticSegment("see-workouts")) view=SeeWorkoutsPage/>
                <Route path=(StaticSegment("trainer"), StaticSegment("see-clients")) view=SeeClientsPage/>
                <Route path=(StaticSegment("client"), StaticSegment("clientpage")) view=ClientPage/>
            </Routes>
        </Router>
    }
}
