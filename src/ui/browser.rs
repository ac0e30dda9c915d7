//! Thin wrappers around the browser APIs used by the UI
//!
//! Everything touching `web_sys` is compiled only with the `hydrate` feature.
//! On the server the same functions exist as no-ops so components can call
//! them unconditionally from event handlers.

use crate::core::storage::{KeyValueStore, StorageError};

#[cfg(feature = "hydrate")]
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// `localStorage`-backed store
///
/// Every operation fails with [`StorageError::Unavailable`] when the browser
/// offers no local storage (or outside the browser).
pub struct BrowserStore {
    #[cfg(feature = "hydrate")]
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    /// Open the window's local storage
    pub fn local() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
            Self { storage }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }

    #[cfg(feature = "hydrate")]
    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Remove(key.to_string()))
    }
}

#[cfg(not(feature = "hydrate"))]
impl KeyValueStore for BrowserStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Run `f` once after `ms` milliseconds
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
}

/// Full-page navigation to `path`
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(path) {
                leptos::logging::warn!("redirect to {path} failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Milliseconds since the epoch, as reported by the browser
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Set (or with an empty value, clear) an inline style property on `<body>`
pub fn set_body_style(property: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = document().body() {
            let _ = body.style().set_property(property, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (property, value);
    }
}

/// Add or remove a class on `<body>`
pub fn toggle_body_class(class: &str, on: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = document().body() {
            let _ = body.class_list().toggle_with_force(class, on);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (class, on);
    }
}

/// Smoothly scroll the element with `id` to the top of the viewport
pub fn scroll_to_anchor(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        if let Some(target) = document().get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Smoothly scroll the window back to the top
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollToOptions};

        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

/// All elements matching `selector`; an invalid selector yields nothing
#[cfg(feature = "hydrate")]
pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
    let Ok(nodes) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Whether an event target lies inside an element matching `selector`
#[cfg(feature = "hydrate")]
pub fn target_within(target: Option<web_sys::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

/// Repeating timer that is cleared when dropped or stopped
#[cfg(feature = "hydrate")]
pub struct IntervalGuard {
    handle: Option<IntervalHandle>,
}

#[cfg(feature = "hydrate")]
impl IntervalGuard {
    pub fn start(period_ms: u32, tick: impl Fn() + 'static) -> Result<Self, JsValue> {
        let handle = set_interval_with_handle(
            tick,
            std::time::Duration::from_millis(u64::from(period_ms)),
        )?;
        Ok(Self {
            handle: Some(handle),
        })
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for IntervalGuard {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Options for [`ViewportObserver`]
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Default)]
pub struct ObserveOptions {
    pub threshold: Option<f64>,
    pub root_margin: Option<&'static str>,
    /// Stop observing an element after its first intersection
    pub once: bool,
}

/// `IntersectionObserver` calling back with each element entering the viewport
///
/// The observer is disconnected when dropped.
#[cfg(feature = "hydrate")]
pub struct ViewportObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl ViewportObserver {
    pub fn new(
        options: ObserveOptions,
        on_enter: impl Fn(web_sys::Element) + 'static,
    ) -> Result<Self, JsValue> {
        let once = options.once;
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if once {
                        observer.unobserve(&target);
                    }
                    on_enter(target);
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        if let Some(threshold) = options.threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &web_sys::Element) {
        self.observer.observe(element);
    }

    /// Observe every element matching `selector`, returning how many were found
    pub fn observe_all(&self, selector: &str) -> usize {
        let elements = query_all(selector);
        for element in &elements {
            self.observe(element);
        }
        elements.len()
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
