//! Theme context for the dark/light preference
//!
//! The page always renders light first so server and client markup agree;
//! a stored `"dark"` preference is applied right after hydration.

use leptos::prelude::*;

use crate::core::Theme;
use crate::core::theme::save_theme;
#[cfg(feature = "hydrate")]
use crate::core::theme::{DARK_THEME_CLASS, load_theme};
use crate::ui::browser::BrowserStore;
#[cfg(feature = "hydrate")]
use crate::ui::browser::toggle_body_class;

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    /// Flip the theme and persist the new preference
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);

        if let Err(err) = save_theme(&BrowserStore::local(), next) {
            leptos::logging::warn!("could not persist theme: {err}");
        }
    }
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        theme: RwSignal::new(Theme::default()),
    };

    #[cfg(feature = "hydrate")]
    {
        // Restore the stored preference once, after hydration
        Effect::new(move |_| {
            if let Ok(theme) = load_theme(&BrowserStore::local()) {
                ctx.theme.set(theme);
            }
        });

        Effect::new(move |_| {
            toggle_body_class(DARK_THEME_CLASS, ctx.theme.get().is_dark());
        });
    }

    provide_context(ctx);
    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Button switching between the dark and light themes
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            type="button"
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || if theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
