//! Page-load timing report

/// Log the navigation's load time once the `load` event has finished
pub fn track_page_load() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        if document().ready_state() == "complete" {
            report_after_load();
        } else {
            let handle = window_event_listener(leptos::ev::load, move |_| report_after_load());
            on_cleanup(move || handle.remove());
        }
    }
}

/// `loadEventEnd` is only populated after the load handlers return
#[cfg(feature = "hydrate")]
fn report_after_load() {
    use crate::ui::browser::after;

    after(0, || {
        if let Some(line) = navigation_timing() {
            leptos::logging::log!("{line}");
        }
    });
}

#[cfg(feature = "hydrate")]
fn navigation_timing() -> Option<String> {
    use crate::core::timing::page_load_report;
    use wasm_bindgen::JsCast;

    let performance = web_sys::window()?.performance()?;
    let entry = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<web_sys::PerformanceNavigationTiming>()
        .ok()?;
    page_load_report(entry.load_event_start(), entry.load_event_end())
}
