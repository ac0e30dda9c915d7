//! Header search box over the service list

use leptos::prelude::*;

use crate::core::search::NO_RESULTS_MESSAGE;
use crate::core::{SearchOutcome, search_services};

#[component]
pub fn ServiceSearch() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let outcome = Memo::new(move |_| search_services(&query.get()));

    let results = move || match outcome.get() {
        SearchOutcome::Hidden => ().into_any(),
        SearchOutcome::NoResults => view! { <p>{NO_RESULTS_MESSAGE}</p> }.into_any(),
        SearchOutcome::Matches(services) => services
            .into_iter()
            .map(|service| view! { <div class="search-result-item">{service}</div> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="search-box">
            <input
                type="search"
                id="search"
                placeholder="Search services..."
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <div
                class="search-results"
                style:display=move || if outcome.get().is_visible() { "block" } else { "none" }
            >
                {results}
            </div>
        </div>
    }
}
