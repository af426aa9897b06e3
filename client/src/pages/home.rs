//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="home-page__hero">
                <h1>"Transform Your Life with Personal Training"</h1>
                <p>"Join us today and start your journey to a healthier, fitter you."</p>
                <a class="btn btn--primary home-page__cta" href="/login">
                    "Get Started"
                </a>
            </div>
        </div>
    }
}
