//! Entrance animations and lazy images driven by viewport intersection
//!
//! Animated elements carry one of the classes from
//! [`AnimationKind`](crate::core::animation::AnimationKind) in their markup;
//! entering the viewport adds the persistent `visible` marker. Revealed
//! elements stay revealed, so scrolling back does not replay the animation.

use leptos::prelude::*;

/// Transparent 1x1 GIF shown until a lazy image is loaded
pub const PLACEHOLDER_SRC: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// Reveal every pending animated element already inside the viewport band
pub fn reveal_pending_in_viewport() {
    #[cfg(feature = "hydrate")]
    {
        use crate::core::animation::{PENDING_ANIMATED_SELECTOR, VISIBLE_CLASS};
        use crate::core::scroll::should_reveal;
        use crate::ui::browser::query_all;

        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();

        for element in query_all(PENDING_ANIMATED_SELECTOR) {
            let top = element.get_bounding_client_rect().top();
            if should_reveal(top, viewport_height) {
                let _ = element.class_list().add_1(VISIBLE_CLASS);
            }
        }
    }
}

/// Observe the page's animated elements for as long as the calling
/// component is mounted
pub fn use_entrance_animations() {
    #[cfg(feature = "hydrate")]
    {
        use crate::core::animation::{
            ANIMATED_SELECTOR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, VISIBLE_CLASS,
        };
        use crate::ui::browser::{ObserveOptions, ViewportObserver};

        let observer = StoredValue::new_local(None::<ViewportObserver>);

        Effect::new(move |_| {
            let options = ObserveOptions {
                threshold: Some(REVEAL_THRESHOLD),
                root_margin: Some(REVEAL_ROOT_MARGIN),
                once: false,
            };
            let created = ViewportObserver::new(options, |element| {
                let _ = element.class_list().add_1(VISIBLE_CLASS);
            });

            match created {
                Ok(created) => {
                    created.observe_all(ANIMATED_SELECTOR);
                    observer.set_value(Some(created));
                }
                Err(err) => leptos::logging::warn!("entrance animations disabled: {err:?}"),
            }
        });
    }
}

/// Swap `data-src` into `src` for every lazy image once it scrolls into view
pub fn use_lazy_images() {
    #[cfg(feature = "hydrate")]
    {
        use crate::ui::browser::{ObserveOptions, ViewportObserver};

        let observer = StoredValue::new_local(None::<ViewportObserver>);

        Effect::new(move |_| {
            let options = ObserveOptions {
                once: true,
                ..Default::default()
            };
            let created = ViewportObserver::new(options, |image| {
                if let Some(src) = image.get_attribute("data-src") {
                    let _ = image.set_attribute("src", &src);
                }
                let _ = image.class_list().remove_1("lazy");
            });

            match created {
                Ok(created) => {
                    created.observe_all("img[data-src]");
                    observer.set_value(Some(created));
                }
                Err(err) => leptos::logging::warn!("lazy loading disabled: {err:?}"),
            }
        });
    }
}

/// Image whose real source is loaded on first intersection
#[component]
pub fn LazyImage(
    src: &'static str,
    alt: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <img
            class=format!("lazy {class}")
            src=PLACEHOLDER_SRC
            data-src=src
            alt=alt
            loading="lazy"
        />
    }
}
