//! Login form component
//!
//! Mock login: any non-empty email and password succeed, then the page
//! redirects to the dashboard.

use leptos::prelude::*;

use super::context::use_auth_context;
use crate::core::forms::{DASHBOARD_PATH, REDIRECT_DELAY_MS};
use crate::core::LoginInput;
use crate::ui::browser::{after, redirect};
use crate::ui::notifications::use_notifications;

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback to switch to register form
    #[prop(optional, into)]
    on_register_click: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let input = LoginInput::new(email.get_untracked(), password.get_untracked());
        let outcome = auth.login(&input);
        let redirects = outcome.redirects();
        notifications.notify(outcome.notification);
        if redirects {
            after(REDIRECT_DELAY_MS, || redirect(DASHBOARD_PATH));
        }
    };

    view! {
        <form id="loginForm" class="auth-form" on:submit=on_submit novalidate=true>
            <div class="auth-form-header">
                <h2>"Welcome Back"</h2>
                <p>"Sign in to see your campaign dashboard"</p>
            </div>

            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="password">"Password"</label>
                <div class="password-field">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="password-reveal"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
            </div>

            <button type="submit" class="btn btn-primary btn-block">"Sign In"</button>

            <div class="auth-form-footer">
                "Don't have an account? "
                <button
                    type="button"
                    class="btn-link"
                    on:click=move |_| {
                        if let Some(callback) = on_register_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign up"
                </button>
            </div>
        </form>
    }
}
