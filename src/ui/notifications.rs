//! Notification banners
//!
//! Banners stack in a fixed container, remove themselves after
//! [`NOTIFICATION_DISMISS_MS`](crate::core::notification::NOTIFICATION_DISMISS_MS)
//! and can be closed early. Identical messages are not merged.

use crate::core::{Notification, NotificationKind};
use crate::ui::browser::after;
use leptos::prelude::*;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Shared handle for raising notifications from any component
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    notifications: RwSignal<Vec<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<Vec<NotificationItem>> {
        self.notifications
    }

    /// Show a banner and schedule its removal
    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let dismiss_ms = notification.auto_dismiss_ms;
        self.notifications
            .update(|n| n.push(NotificationItem { id, notification }));

        let center = *self;
        after(dismiss_ms, move || center.dismiss(id));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notification::error(message));
    }

    /// Remove a banner; unknown ids are ignored
    pub fn dismiss(&self, id: u64) {
        let _ = self
            .notifications
            .try_update(|n| n.retain(|item| item.id != id));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the notification center and provide it to the component tree
pub fn provide_notification_center() -> NotificationCenter {
    let center = NotificationCenter::new();
    provide_context(center);
    center
}

pub fn use_notifications() -> NotificationCenter {
    expect_context::<NotificationCenter>()
}

/// Renders every active banner; place once at the application root
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let center = use_notifications();
    let notifications = center.notifications();

    view! {
        <div class="notifications" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| {
                    view! {
                        <NotificationBanner
                            id=item.id
                            kind=item.notification.kind
                            message=item.notification.message
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn NotificationBanner(id: u64, kind: NotificationKind, message: String) -> impl IntoView {
    let center = use_notifications();

    view! {
        <div class=kind.class() role="status">
            <div class="notification-content">
                <span class="notification-message">{message}</span>
                <button
                    type="button"
                    class="notification-close"
                    aria-label="Close notification"
                    on:click=move |_| center.dismiss(id)
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
