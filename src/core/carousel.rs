//! Testimonial carousel index arithmetic

/// Auto-advance period
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

/// Current slide of a carousel with at least two slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
}

impl Carousel {
    /// Returns `None` for fewer than two slides; such carousels are static
    pub fn new(total: usize) -> Option<Self> {
        (total >= 2).then_some(Self { current: 0, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Auto-advance step, wrapping to the first slide
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.total;
    }

    /// Jump to a slide; out-of-range indices are ignored
    ///
    /// The auto-advance timer keeps its phase, so the next tick moves on from
    /// the slide chosen here.
    pub fn go_to(&mut self, index: usize) {
        if index < self.total {
            self.current = index;
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Horizontal offset of a slide relative to the current one, in percent
    pub fn offset_percent(&self, index: usize) -> i64 {
        (index as i64 - self.current as i64) * 100
    }

    pub fn transform(&self, index: usize) -> String {
        format!("translateX({}%)", self.offset_percent(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_two_slides() {
        assert!(Carousel::new(0).is_none());
        assert!(Carousel::new(1).is_none());
        assert!(Carousel::new(2).is_some());
    }

    #[test]
    fn test_advance_cycles() {
        let mut carousel = Carousel::new(3).unwrap();
        let mut seen = vec![carousel.current()];
        for _ in 0..4 {
            carousel.advance();
            seen.push(carousel.current());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_go_to_and_offsets() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.go_to(2);
        assert_eq!(carousel.current(), 2);
        assert!(carousel.is_active(2));
        assert!(!carousel.is_active(0));
        assert_eq!(carousel.transform(0), "translateX(-200%)");
        assert_eq!(carousel.transform(2), "translateX(0%)");

        carousel.go_to(7);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_tick_after_dot_click_continues_from_chosen_slide() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.go_to(2);
        carousel.advance();
        assert_eq!(carousel.current(), 0);
    }
}
