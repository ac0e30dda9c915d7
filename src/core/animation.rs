//! Entrance animation classes and stagger delays

/// Marker added once an animated element has entered the viewport
pub const VISIBLE_CLASS: &str = "visible";

/// Selector matching every element that carries an entrance animation
pub const ANIMATED_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right";

/// Same as [`ANIMATED_SELECTOR`] but skipping elements already revealed
pub const PENDING_ANIMATED_SELECTOR: &str =
    ".fade-in:not(.visible), .slide-in-left:not(.visible), .slide-in-right:not(.visible)";

/// Intersection threshold for entrance animations
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin for entrance animations
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Entrance animation styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    FadeIn,
    SlideInLeft,
    SlideInRight,
}

impl AnimationKind {
    pub fn class(&self) -> &'static str {
        match self {
            AnimationKind::FadeIn => "fade-in",
            AnimationKind::SlideInLeft => "slide-in-left",
            AnimationKind::SlideInRight => "slide-in-right",
        }
    }
}

/// Groups of elements that animate in with a per-index stagger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerGroup {
    ServiceCard,
    Testimonial,
    PricingCard,
}

impl StaggerGroup {
    pub fn kind(&self) -> AnimationKind {
        match self {
            StaggerGroup::ServiceCard | StaggerGroup::PricingCard => AnimationKind::FadeIn,
            StaggerGroup::Testimonial => AnimationKind::SlideInLeft,
        }
    }

    /// Delay step between consecutive elements, in seconds
    pub fn step_secs(&self) -> f64 {
        match self {
            StaggerGroup::ServiceCard => 0.1,
            StaggerGroup::Testimonial => 0.2,
            StaggerGroup::PricingCard => 0.15,
        }
    }

    pub fn delay_secs(&self, index: usize) -> f64 {
        index as f64 * self.step_secs()
    }

    /// Inline `animation-delay` declaration for the element at `index`
    pub fn delay_style(&self, index: usize) -> String {
        format!("animation-delay: {}s;", format_secs(self.delay_secs(index)))
    }
}

// Rounded to hundredths so 3 * 0.1 renders as "0.3" instead of "0.30000000000000004"
fn format_secs(secs: f64) -> String {
    let rounded = (secs * 100.0).round() / 100.0;
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        assert_eq!(StaggerGroup::ServiceCard.delay_style(0), "animation-delay: 0s;");
        assert_eq!(StaggerGroup::ServiceCard.delay_style(3), "animation-delay: 0.3s;");
        assert_eq!(StaggerGroup::Testimonial.delay_style(2), "animation-delay: 0.4s;");
        assert_eq!(StaggerGroup::PricingCard.delay_style(1), "animation-delay: 0.15s;");
    }

    #[test]
    fn test_group_kinds() {
        assert_eq!(StaggerGroup::ServiceCard.kind().class(), "fade-in");
        assert_eq!(StaggerGroup::Testimonial.kind().class(), "slide-in-left");
        assert_eq!(StaggerGroup::PricingCard.kind().class(), "fade-in");
    }
}
