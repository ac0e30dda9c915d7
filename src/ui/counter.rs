//! Statistic counters that count up when first scrolled into view

use leptos::prelude::*;

/// Numeric statistic, e.g. `"156+"`, animated from zero on first sight
///
/// Text without digits is rendered as-is and never animated.
#[component]
pub fn AnimatedCounter(
    text: &'static str,
    #[prop(default = "stat-number")] class: &'static str,
) -> impl IntoView {
    let display = RwSignal::new(text.to_string());
    let node_ref = NodeRef::<leptos::html::Span>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::core::counter::COUNTER_TICK_MS;
        use crate::core::{CounterAnimation, CounterTarget};
        use crate::ui::browser::{IntervalGuard, ObserveOptions, ViewportObserver};
        use std::cell::RefCell;

        let observer = StoredValue::new_local(None::<ViewportObserver>);
        let timer = StoredValue::new_local(None::<IntervalGuard>);

        let start = move |target: CounterTarget| {
            let animation = RefCell::new(CounterAnimation::new(target));
            let tick = move || {
                let mut animation = animation.borrow_mut();
                display.set(animation.tick());
                if animation.is_finished() {
                    timer.set_value(None);
                }
            };
            match IntervalGuard::start(COUNTER_TICK_MS, tick) {
                Ok(guard) => timer.set_value(Some(guard)),
                Err(err) => leptos::logging::warn!("counter animation failed: {err:?}"),
            }
        };

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            let Some(target) = CounterTarget::parse(text) else {
                return;
            };

            let options = ObserveOptions {
                once: true,
                ..Default::default()
            };
            // The element is unobserved after the first hit, so this runs once
            let created = ViewportObserver::new(options, move |_| start(target.clone()));
            match created {
                Ok(created) => {
                    created.observe(&element);
                    observer.set_value(Some(created));
                }
                Err(err) => leptos::logging::warn!("counter observer failed: {err:?}"),
            }
        });
    }

    view! {
        <span class=class node_ref=node_ref>
            {move || display.get()}
        </span>
    }
}
