//! Rendering-independent site logic
//!
//! Everything here compiles for both the server and the browser and is unit
//! tested natively; the `ui` module wires it to the DOM.

pub mod animation;
pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod counter;
pub mod dashboard;
pub mod forms;
pub mod nav;
pub mod notification;
pub mod pricing;
pub mod scroll;
pub mod search;
pub mod session;
pub mod sitemap;
pub mod storage;
#[cfg(test)]
mod tests;
pub mod theme;
pub mod timing;

pub use carousel::Carousel;
pub use counter::{CounterAnimation, CounterTarget};
pub use dashboard::DashboardFilter;
pub use forms::{FormError, LoginInput, RegisterInput};
pub use nav::NavState;
pub use notification::{Notification, NotificationKind};
pub use pricing::BillingPeriod;
pub use search::{SearchOutcome, search_services};
pub use session::SessionUser;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use theme::Theme;
