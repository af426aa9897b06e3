//! Name / email / password inputs bound to a `UserForm` signal.

use leptos::prelude::*;

use crate::state::user_form::UserForm;

/// Labelled inputs for the account-creation forms.
#[component]
pub fn UserFormFields(form: RwSignal<UserForm>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="firstName">"First Name"</label>
            <input
                id="firstName"
                type="text"
                required
                prop:value=move || form.with(|f| f.first_name.clone())
                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for="lastName">"Last Name"</label>
            <input
                id="lastName"
                type="text"
                required
                prop:value=move || form.with(|f| f.last_name.clone())
                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for="email">"Email"</label>
            <input
                id="email"
                type="email"
                required
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label for="password">"Password"</label>
            <input
                id="password"
                type="password"
                required
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
            />
        </div>
    }
}
