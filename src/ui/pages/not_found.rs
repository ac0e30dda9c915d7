//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <div class="not-found-actions">
                <A href="/" attr:class="btn btn-primary">"Go Home"</A>
                <A href="/dashboard" attr:class="btn btn-outline">"Dashboard"</A>
            </div>
        </div>
    }
}
