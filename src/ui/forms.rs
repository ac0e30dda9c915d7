//! Landing page forms
//!
//! Contact and newsletter submissions are logged to the console and
//! acknowledged immediately. Any other form is wrapped in [`SimulatedForm`],
//! which mimics a two-second round trip.

use leptos::prelude::*;

use crate::core::forms::{
    CONTACT_SUCCESS, ContactMessage, GENERIC_SUBMIT_SUCCESS, NEWSLETTER_SUCCESS,
    NewsletterSignup, SIMULATED_SUBMIT_MS, describe,
};
use crate::ui::browser::after;
use crate::ui::notifications::use_notifications;

#[component]
pub fn ContactForm() -> impl IntoView {
    let notifications = use_notifications();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let submission = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            message: message.get_untracked(),
        };
        leptos::logging::log!("{}", describe("Contact form data", &submission));
        notifications.success(CONTACT_SUCCESS);

        for field in [name, email, company, message] {
            field.set(String::new());
        }
    };

    view! {
        <form id="contactForm" class="contact-form" on:submit=on_submit>
            <div class="form-row">
                <div class="form-group">
                    <label for="contact-name">"Name"</label>
                    <input
                        type="text"
                        id="contact-name"
                        name="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="contact-email">"Email"</label>
                    <input
                        type="email"
                        id="contact-email"
                        name="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="contact-company">"Company"</label>
                <input
                    type="text"
                    id="contact-company"
                    name="company"
                    prop:value=move || company.get()
                    on:input=move |ev| company.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary">"Send Message"</button>
        </form>
    }
}

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let notifications = use_notifications();
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let signup = NewsletterSignup {
            email: email.get_untracked(),
        };
        leptos::logging::log!("{}", describe("Newsletter subscription", &signup));
        notifications.success(NEWSLETTER_SUCCESS);
        email.set(String::new());
    };

    view! {
        <form id="newsletterForm" class="newsletter-form" on:submit=on_submit>
            <input
                type="email"
                name="email"
                placeholder="Your email address"
                aria-label="Email address"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">"Subscribe"</button>
        </form>
    }
}

/// Form with no dedicated handler
///
/// Submitting disables the button and shows a spinner for
/// [`SIMULATED_SUBMIT_MS`] before restoring it and reporting success.
#[component]
pub fn SimulatedForm(
    #[prop(into)] id: String,
    #[prop(default = "Submit")] submit_label: &'static str,
    children: Children,
) -> impl IntoView {
    let notifications = use_notifications();
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }

        sending.set(true);
        after(SIMULATED_SUBMIT_MS, move || {
            sending.set(false);
            notifications.success(GENERIC_SUBMIT_SUCCESS);
        });
    };

    view! {
        <form id=id class="simulated-form" on:submit=on_submit>
            {children()}
            <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                {move || {
                    if sending.get() {
                        view! { <span class="loading"></span> " Sending..." }.into_any()
                    } else {
                        view! { {submit_label} }.into_any()
                    }
                }}
            </button>
        </form>
    }
}
