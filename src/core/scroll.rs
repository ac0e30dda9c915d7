//! Scroll position thresholds

/// Offset from which the header switches to its solid "scrolled" style
pub const HEADER_SCROLLED_OFFSET: f64 = 100.0;

/// Offset from which the scroll-to-top control is shown
pub const SCROLL_TOP_VISIBLE_OFFSET: f64 = 300.0;

/// Distance from the viewport bottom an element must pass before it is revealed
pub const REVEAL_MARGIN: f64 = 150.0;

/// Scroll padding applied to the document so anchors clear the fixed header
pub const SCROLL_PADDING_TOP: &str = "80px";

pub fn is_header_scrolled(offset: f64) -> bool {
    offset >= HEADER_SCROLLED_OFFSET
}

pub fn is_scroll_top_visible(offset: f64) -> bool {
    offset >= SCROLL_TOP_VISIBLE_OFFSET
}

/// Whether an element whose bounding box starts at `top` (viewport-relative)
/// should receive its entrance animation
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_threshold() {
        for offset in [100.0, 100.5, 250.0, 10_000.0] {
            assert!(is_header_scrolled(offset), "offset {offset}");
        }
        for offset in [0.0, 50.0, 99.9] {
            assert!(!is_header_scrolled(offset), "offset {offset}");
        }
    }

    #[test]
    fn test_scroll_top_threshold() {
        assert!(is_scroll_top_visible(300.0));
        assert!(is_scroll_top_visible(1200.0));
        assert!(!is_scroll_top_visible(299.0));
        assert!(!is_scroll_top_visible(0.0));
    }

    #[test]
    fn test_reveal_threshold() {
        assert!(should_reveal(400.0, 800.0));
        assert!(!should_reveal(650.0, 800.0));
        assert!(!should_reveal(700.0, 800.0));
        assert!(should_reveal(-200.0, 800.0));
    }
}
