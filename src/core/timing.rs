//! Debounce and throttle primitives
//!
//! Both work on caller-supplied millisecond timestamps (`Date.now()` in the
//! browser) instead of reading a clock, so they behave the same in native
//! tests and in WebAssembly where `std::time::Instant` is unavailable.

/// Reveal re-checks on scroll run at most once per frame budget
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Leading-edge throttle: fires at most once per `interval_ms`
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_fired: None,
        }
    }

    /// Returns `true` and records the call when enough time has passed
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

/// Trailing-edge debounce: fires once calls have been quiet for `wait_ms`
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait_ms: f64,
    pending_since: Option<f64>,
}

impl Debouncer {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            pending_since: None,
        }
    }

    /// Record a call, pushing the deadline back
    pub fn call(&mut self, now_ms: f64) {
        self.pending_since = Some(now_ms);
    }

    /// Returns `true` once when the quiet period has elapsed
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.pending_since {
            Some(since) if now_ms - since >= self.wait_ms => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}

/// Console line reporting the duration of the page's `load` event
///
/// Measured from `loadEventStart` to `loadEventEnd` of the navigation entry.
/// Returns `None` while the entry has no `loadEventEnd` yet.
pub fn page_load_report(load_event_start_ms: f64, load_event_end_ms: f64) -> Option<String> {
    if load_event_end_ms <= 0.0 || load_event_end_ms < load_event_start_ms {
        return None;
    }
    Some(format!(
        "Page Load Time: {}ms",
        (load_event_end_ms - load_event_start_ms).round()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_leading_edge() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.try_fire(0.0));
        assert!(!throttle.try_fire(50.0));
        assert!(!throttle.try_fire(99.0));
        assert!(throttle.try_fire(100.0));
        assert!(!throttle.try_fire(150.0));
    }

    #[test]
    fn test_debounce_waits_for_quiet_period() {
        let mut debounce = Debouncer::new(200.0);
        debounce.call(0.0);
        debounce.call(150.0);
        assert!(!debounce.poll(300.0));
        assert!(debounce.poll(350.0));
        assert!(!debounce.poll(1000.0));
    }

    #[test]
    fn test_page_load_report() {
        assert_eq!(
            page_load_report(1200.0, 1212.6).as_deref(),
            Some("Page Load Time: 13ms")
        );
        assert_eq!(page_load_report(0.0, 0.0), None);
        assert_eq!(page_load_report(500.0, 100.0), None);
    }
}
