use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{DashboardPage, HomePage, LoginPage, NotFoundPage, RegisterPage};
use crate::ui::performance::track_page_load;
use crate::ui::{
    NotificationsContainer, ScrollToTop, provide_auth_context, provide_nav_context,
    provide_notification_center, provide_scroll_context, provide_theme_context,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Pulsemark - digital marketing agency"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Notifications first: the other contexts report through them
    provide_notification_center();
    provide_theme_context();
    provide_auth_context();
    provide_nav_context();
    provide_scroll_context();

    track_page_load();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/pulsemark.css"/>

        <Title text="Pulsemark - Digital Marketing Agency"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <Route path=path!("/dashboard") view=DashboardPage/>
            </Routes>
        </Router>

        <ScrollToTop/>
        <NotificationsContainer/>
    }
}
