//! Counter animation arithmetic
//!
//! A counter such as `"156+"` is split into its numeric target and suffix and
//! animated from zero in [`COUNTER_STEPS`] equal increments, one every
//! [`COUNTER_TICK_MS`].

/// Number of increments from zero to the target
pub const COUNTER_STEPS: u32 = 100;

/// Interval between increments
pub const COUNTER_TICK_MS: u32 = 20;

/// Target value and suffix parsed from a counter's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTarget {
    pub target: u64,
    pub suffix: String,
}

impl CounterTarget {
    /// Split text into all of its digits and everything else
    ///
    /// Returns `None` when the text contains no digit at all.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        let target = digits.parse().ok()?;
        let suffix = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        Some(Self { target, suffix })
    }
}

/// Running state of one counter animation
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    suffix: String,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget) -> Self {
        let goal = target.target as f64;
        Self {
            target: goal,
            increment: goal / COUNTER_STEPS as f64,
            current: 0.0,
            suffix: target.suffix,
            finished: false,
        }
    }

    /// Advance one tick and return the text to display
    ///
    /// Once the value reaches the target it is clamped and the animation
    /// reports itself finished; further ticks keep returning the final text.
    pub fn tick(&mut self) -> String {
        if !self.finished {
            self.current += self.increment;
            if self.current >= self.target {
                self.current = self.target;
                self.finished = true;
            }
        }
        self.text()
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }

    pub fn value(&self) -> u64 {
        self.current.floor() as u64
    }

    /// Whether the update timer should be cleared
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_and_suffix() {
        let parsed = CounterTarget::parse("156+").unwrap();
        assert_eq!(parsed.target, 156);
        assert_eq!(parsed.suffix, "+");

        let parsed = CounterTarget::parse("98%").unwrap();
        assert_eq!(parsed.target, 98);
        assert_eq!(parsed.suffix, "%");

        assert_eq!(CounterTarget::parse("many"), None);
    }

    #[test]
    fn test_counter_reaches_exact_target() {
        let mut animation = CounterAnimation::new(CounterTarget::parse("156+").unwrap());
        let mut previous = 0;
        let mut ticks = 0;

        while !animation.is_finished() {
            animation.tick();
            assert!(animation.value() >= previous, "values must not decrease");
            previous = animation.value();
            ticks += 1;
            assert!(ticks <= COUNTER_STEPS + 1, "timer must stop");
        }

        assert_eq!(animation.text(), "156+");
        assert_eq!(animation.tick(), "156+");
    }

    #[test]
    fn test_zero_target_finishes_on_first_tick() {
        let mut animation = CounterAnimation::new(CounterTarget::parse("0 projects").unwrap());
        assert_eq!(animation.tick(), "0 projects");
        assert!(animation.is_finished());
    }
}
