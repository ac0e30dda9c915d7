//! Registration form component
//!
//! Only checks that both password fields agree. No account is created; the
//! submitted details are written to the console and the form is cleared.

use leptos::prelude::*;

use crate::core::RegisterInput;
use crate::core::forms::{describe, register_outcome};
use crate::ui::notifications::use_notifications;

#[component]
pub fn RegisterForm(
    /// Callback to switch to the login form
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    let notifications = use_notifications();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let reset = move || {
        name.set(String::new());
        email.set(String::new());
        password.set(String::new());
        confirm_password.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let input = RegisterInput {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };

        let outcome = register_outcome(&input);
        if outcome.reset {
            leptos::logging::log!("{}", describe("Registration data", &input));
            reset();
        }
        notifications.notify(outcome.notification);
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      input_type: &'static str,
                      autocomplete: &'static str,
                      value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=input_type
                    id=id
                    name=id
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <form id="registerForm" class="auth-form" on:submit=on_submit novalidate=true>
            <div class="auth-form-header">
                <h2>"Create Account"</h2>
                <p>"Start tracking your campaigns in minutes"</p>
            </div>

            {field("name", "Full Name", "text", "name", name)}
            {field("email", "Email", "email", "email", email)}
            {field("password", "Password", "password", "new-password", password)}
            {field("confirmPassword", "Confirm Password", "password", "new-password", confirm_password)}

            <button type="submit" class="btn btn-primary btn-block">"Create Account"</button>

            <div class="auth-form-footer">
                "Already have an account? "
                <button
                    type="button"
                    class="btn-link"
                    on:click=move |_| {
                        if let Some(callback) = on_login_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign in"
                </button>
            </div>
        </form>
    }
}
