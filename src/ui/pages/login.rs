//! Login page
//!
//! Standalone page around [`LoginForm`]; a successful login redirects to the
//! dashboard.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::LoginForm;
use crate::ui::theme::ThemeToggle;

#[component]
pub fn LoginPage() -> impl IntoView {
    // Switch to register page
    let on_register_click = move |_| {
        let navigate = use_navigate();
        navigate("/register", Default::default());
    };

    view! {
        <AuthLayout>
            <LoginForm on_register_click=Callback::new(on_register_click) />
        </AuthLayout>
    }
}

/// Shared frame of the login and registration pages
#[component]
pub(super) fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <header class="auth-header">
                <A href="/" attr:class="logo">
                    <span class="logo-mark">"P"</span>
                    <span class="logo-text">"Pulsemark"</span>
                </A>
                <ThemeToggle />
            </header>

            <main class="auth-main">
                <div class="auth-card">{children()}</div>
            </main>

            <footer class="auth-footer">
                <p>"© 2025 Pulsemark. All rights reserved."</p>
            </footer>
        </div>
    }
}
