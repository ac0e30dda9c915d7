//! Registration page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::login::AuthLayout;
use crate::ui::auth::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let on_login_click = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <AuthLayout>
            <RegisterForm on_login_click=Callback::new(on_login_click) />
        </AuthLayout>
    }
}
