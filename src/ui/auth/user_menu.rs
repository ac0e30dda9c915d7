//! Header auth controls
//!
//! Shows the login button while logged out and the user menu with the stored
//! name once a session exists.

use leptos::prelude::*;

use super::context::use_auth_context;
use crate::core::forms::{HOME_PATH, LOGOUT_SUCCESS, REDIRECT_DELAY_MS};
use crate::ui::browser::{after, redirect};
use crate::ui::notifications::use_notifications;

#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();
    let dropdown_open = RwSignal::new(false);

    let on_logout = move |_| {
        dropdown_open.set(false);
        auth.logout();
        notifications.success(LOGOUT_SUCCESS);
        after(REDIRECT_DELAY_MS, || redirect(HOME_PATH));
    };

    view! {
        <a
            href="/login"
            class="btn btn-outline login-btn"
            style:display=move || if auth.is_authenticated() { "none" } else { "" }
        >
            "Login"
        </a>
        <div
            class="user-menu"
            style:display=move || if auth.is_authenticated() { "block" } else { "none" }
        >
            <button
                type="button"
                class="user-menu-trigger"
                aria-expanded=move || dropdown_open.get().to_string()
                on:click=move |_| dropdown_open.update(|v| *v = !*v)
            >
                <span class="user-name">{move || auth.user_name().unwrap_or_default()}</span>
            </button>
            <div class="user-dropdown" class:open=move || dropdown_open.get()>
                <a href="/dashboard" class="user-dropdown-item">"Dashboard"</a>
                <button type="button" class="user-dropdown-item logout-btn" on:click=on_logout>
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}
