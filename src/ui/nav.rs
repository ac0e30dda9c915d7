//! Site header with the mobile navigation menu
//!
//! The menu-open flag lives in [`NavContext`], provided by the root
//! component. While open, page scrolling is locked and a click anywhere
//! outside `.nav` closes the menu.

use leptos::prelude::*;

use crate::core::NavState;
use crate::core::scroll::is_header_scrolled;
use crate::ui::auth::UserMenu;
use crate::ui::browser::scroll_to_anchor;
use crate::ui::scroll::use_scroll_context;
use crate::ui::search::ServiceSearch;
use crate::ui::theme::ThemeToggle;

/// Sections reachable from the header, as (element id, label)
pub const SECTION_LINKS: [(&str, &str); 4] = [
    ("services", "Services"),
    ("testimonials", "Testimonials"),
    ("pricing", "Pricing"),
    ("contact", "Contact"),
];

#[derive(Clone, Copy)]
pub struct NavContext {
    pub state: RwSignal<NavState>,
}

impl NavContext {
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn toggle(&self) {
        self.state.update(NavState::toggle);
    }

    pub fn close(&self) {
        if self.state.get_untracked().is_open() {
            self.state.update(NavState::close);
        }
    }
}

/// Provide the navigation state and install the scroll lock and
/// outside-click listener
pub fn provide_nav_context() -> NavContext {
    let ctx = NavContext {
        state: RwSignal::new(NavState::default()),
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::ui::browser::{set_body_style, target_within};

        Effect::new(move |_| {
            set_body_style("overflow", ctx.state.get().body_overflow());
        });

        let handle = window_event_listener(leptos::ev::click, move |ev| {
            let state = ctx.state.get_untracked();
            if state.is_open() && state.closes_on_click(target_within(ev.target(), ".nav")) {
                ctx.close();
            }
        });
        on_cleanup(move || handle.remove());
    }

    provide_context(ctx);
    ctx
}

pub fn use_nav_context() -> NavContext {
    expect_context::<NavContext>()
}

/// In-page link that smooth-scrolls to its section
#[component]
pub fn SectionLink(target: &'static str, children: Children) -> impl IntoView {
    let nav = use_nav_context();

    view! {
        <a
            href=format!("#{target}")
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_anchor(target);
                nav.close();
            }
        >
            {children()}
        </a>
    }
}

/// Fixed site header
#[component]
pub fn SiteHeader() -> impl IntoView {
    let nav = use_nav_context();
    let scroll = use_scroll_context();

    view! {
        <header class="header" class:scrolled=move || is_header_scrolled(scroll.offset.get())>
            <div class="container">
                <nav class="nav">
                    <a href="/" class="logo">
                        <span class="logo-mark">"P"</span>
                        <span class="logo-text">"Pulsemark"</span>
                    </a>

                    <ul class="nav-links" class:active=move || nav.is_open()>
                        {SECTION_LINKS
                            .into_iter()
                            .map(|(id, label)| {
                                view! {
                                    <li>
                                        <SectionLink target=id>{label}</SectionLink>
                                    </li>
                                }
                            })
                            .collect_view()}
                        <li>
                            <a href="/dashboard">"Dashboard"</a>
                        </li>
                    </ul>

                    <div class="nav-actions">
                        <ServiceSearch />
                        <ThemeToggle />
                        <UserMenu />
                    </div>

                    <button
                        type="button"
                        class="nav-toggle"
                        class:active=move || nav.is_open()
                        aria-label="Toggle navigation"
                        aria-expanded=move || nav.is_open().to_string()
                        on:click=move |_| nav.toggle()
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </nav>
            </div>
        </header>
    }
}
