//! Testimonial carousel
//!
//! Auto-advances every five seconds. Dot navigation jumps directly to a
//! slide but leaves the timer's phase alone, so the next tick may follow a
//! click almost immediately.

use leptos::prelude::*;

use crate::core::Carousel;
use crate::core::animation::StaggerGroup;

/// A client quote shown in the carousel
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[component]
pub fn TestimonialCarousel(testimonials: Vec<Testimonial>) -> impl IntoView {
    let total = testimonials.len();
    let carousel = RwSignal::new(Carousel::new(total));

    #[cfg(feature = "hydrate")]
    {
        use crate::core::carousel::CAROUSEL_INTERVAL_MS;
        use crate::ui::browser::IntervalGuard;

        let timer = StoredValue::new_local(None::<IntervalGuard>);

        Effect::new(move |_| {
            if carousel.get_untracked().is_none() {
                return;
            }
            let advance = move || {
                carousel.update(|state| {
                    if let Some(state) = state {
                        state.advance();
                    }
                })
            };
            match IntervalGuard::start(CAROUSEL_INTERVAL_MS, advance) {
                Ok(guard) => timer.set_value(Some(guard)),
                Err(err) => leptos::logging::warn!("carousel auto-advance failed: {err:?}"),
            }
        });
    }

    let is_active = move |index: usize| carousel.get().is_some_and(|c| c.is_active(index));

    let slides = testimonials
        .into_iter()
        .enumerate()
        .map(|(index, testimonial)| {
            let group = StaggerGroup::Testimonial;
            let style = move || {
                let transform = carousel
                    .get()
                    .map(|c| format!("transform: {};", c.transform(index)))
                    .unwrap_or_default();
                format!("{transform} {}", group.delay_style(index))
            };

            view! {
                <div
                    class=format!("testimonial {}", group.kind().class())
                    class:active=move || is_active(index)
                    style=style
                >
                    <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
                    <div class="testimonial-author">
                        <strong>{testimonial.author}</strong>
                        <span>{testimonial.role}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = carousel.get_untracked().map(|_| {
        view! {
            <div class="carousel-dots">
                {(0..total)
                    .map(|index| {
                        view! {
                            <button
                                type="button"
                                class="dot"
                                class:active=move || is_active(index)
                                aria-label=format!("Show testimonial {}", index + 1)
                                on:click=move |_| {
                                    carousel.update(|state| {
                                        if let Some(state) = state {
                                            state.go_to(index);
                                        }
                                    })
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="testimonials-carousel">
            {slides}
            {dots}
        </div>
    }
}
