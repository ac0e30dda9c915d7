pub mod auth;
pub mod browser;
pub mod carousel;
pub mod counter;
pub mod forms;
pub mod nav;
pub mod notifications;
pub mod pages;
pub mod performance;
pub mod pricing;
pub mod reveal;
pub mod scroll;
pub mod search;
pub mod theme;

pub use auth::{provide_auth_context, use_auth_context};
pub use nav::{SiteHeader, provide_nav_context};
pub use notifications::{NotificationsContainer, provide_notification_center, use_notifications};
pub use scroll::{ScrollToTop, provide_scroll_context};
pub use theme::{ThemeToggle, provide_theme_context};
