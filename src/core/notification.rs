//! Transient notification banners

/// Banners remove themselves after this long
pub const NOTIFICATION_DISMISS_MS: u32 = 5000;

/// Notification severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// Class list of the banner element
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// A banner waiting to be displayed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub auto_dismiss_ms: u32,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            auto_dismiss_ms: NOTIFICATION_DISMISS_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(
            NotificationKind::Error.class(),
            "notification notification-error"
        );
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }

    #[test]
    fn test_default_dismiss_delay() {
        let notification = Notification::success("Saved");
        assert_eq!(notification.auto_dismiss_ms, 5000);
        assert_eq!(notification.kind, NotificationKind::Success);
    }
}
