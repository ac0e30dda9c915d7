//! Scroll-driven effects
//!
//! The window scroll offset is mirrored into [`ScrollContext`]; the header
//! and the scroll-to-top control derive their markers from it. Each scroll
//! also re-checks entrance animations still waiting to be revealed.

use leptos::prelude::*;

use crate::core::scroll::is_scroll_top_visible;
use crate::ui::browser::scroll_to_top;

#[derive(Clone, Copy)]
pub struct ScrollContext {
    /// Vertical scroll offset of the window
    pub offset: RwSignal<f64>,
}

pub fn provide_scroll_context() -> ScrollContext {
    let ctx = ScrollContext {
        offset: RwSignal::new(0.0),
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::core::scroll::SCROLL_PADDING_TOP;
        use crate::core::timing::{Debouncer, SCROLL_THROTTLE_MS, Throttle};
        use crate::ui::browser::{after, now_ms};
        use crate::ui::reveal::reveal_pending_in_viewport;
        use wasm_bindgen::JsCast;

        if let Some(root) = document()
            .document_element()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = root
                .style()
                .set_property("scroll-padding-top", SCROLL_PADDING_TOP);
        }

        let throttle = StoredValue::new(Throttle::new(SCROLL_THROTTLE_MS));
        let trailing = StoredValue::new(Debouncer::new(SCROLL_THROTTLE_MS));

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            ctx.offset.set(window().scroll_y().unwrap_or_default());

            let now = now_ms();
            let mut fire = false;
            throttle.update_value(|t| fire = t.try_fire(now));
            if fire {
                reveal_pending_in_viewport();
                return;
            }

            // Catch the final position of a burst the throttle skipped
            trailing.update_value(|d| d.call(now));
            after(SCROLL_THROTTLE_MS as u32, move || {
                let mut due = false;
                trailing.update_value(|d| due = d.poll(now_ms()));
                if due {
                    reveal_pending_in_viewport();
                }
            });
        });
        on_cleanup(move || handle.remove());
    }

    provide_context(ctx);
    ctx
}

pub fn use_scroll_context() -> ScrollContext {
    expect_context::<ScrollContext>()
}

/// Floating button returning to the top of the page
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let scroll = use_scroll_context();

    view! {
        <button
            type="button"
            class="scroll-to-top"
            class:visible=move || is_scroll_top_visible(scroll.offset.get())
            aria-label="Scroll to top"
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
    }
}
