//! Mobile navigation menu state

/// Open/closed state of the mobile navigation overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is locked exactly while the menu is open
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force the menu closed regardless of its current state
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether a click should close the menu
    pub fn closes_on_click(&self, inside_nav: bool) -> bool {
        self.open && !inside_nav
    }

    /// `overflow` value for the page body
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked() { "hidden" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(nav.is_open());
        assert_eq!(nav.body_overflow(), "hidden");

        nav.toggle();
        assert!(!nav.is_open());
        assert!(!nav.scroll_locked());
        assert_eq!(nav.body_overflow(), "");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut nav = NavState::default();
        nav.close();
        assert!(!nav.is_open());

        nav.toggle();
        nav.close();
        nav.close();
        assert!(!nav.is_open());
    }

    #[test]
    fn test_outside_click_only_closes_open_menu() {
        let mut nav = NavState::default();
        assert!(!nav.closes_on_click(false));

        nav.toggle();
        assert!(nav.closes_on_click(false));
        assert!(!nav.closes_on_click(true));
    }
}
