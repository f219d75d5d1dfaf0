//! User notifications and the toast stack that shows them.

use crate::domain::error::DEFAULT_TOAST;
use crate::domain::{FetchError, MissingDetailRecord};
use std::collections::VecDeque;
use std::time::Duration;

/// Most toasts shown at once. Older ones stay queued until they expire.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// An error message for the user, with how long it should stay up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown in the toast.
    pub message: String,
    /// Time on screen before auto-dismiss.
    pub lifetime: Duration,
}

impl Notification {
    /// Builds a notification with the default lifetime.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            lifetime: DEFAULT_TOAST,
        }
    }
}

impl From<&FetchError> for Notification {
    fn from(err: &FetchError) -> Self {
        Self {
            message: err.user_message(),
            lifetime: err.toast_duration(),
        }
    }
}

impl From<MissingDetailRecord> for Notification {
    fn from(err: MissingDetailRecord) -> Self {
        Self::error(err.to_string())
    }
}

/// A notification on screen until `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// The notification shown.
    pub notification: Notification,
    /// Session time at which it disappears.
    pub expires_at: Duration,
}

/// Time-ordered stack of live toasts.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast and returns its expiry.
    pub fn push(&mut self, notification: Notification, now: Duration) -> Duration {
        let expires_at = now + notification.lifetime;
        tracing::info!(message = %notification.message, "notify");
        self.toasts.push_back(Toast {
            notification,
            expires_at,
        });
        expires_at
    }

    /// Drops expired toasts. Returns `true` if any were removed.
    pub fn prune(&mut self, now: Duration) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        self.toasts.len() != before
    }

    /// Toasts to draw, oldest first, newest last.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        let skip = self.toasts.len().saturating_sub(MAX_VISIBLE_TOASTS);
        self.toasts.iter().skip(skip)
    }

    /// Earliest pending expiry.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.toasts.iter().map(|toast| toast.expires_at).min()
    }

    /// Whether no toast is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn not_found_toast_expires_quickly() {
        let mut queue = ToastQueue::new();
        let err = FetchError::NotFound {
            message: "category not found".to_string(),
        };
        let expiry = queue.push(Notification::from(&err), ms(1000));
        assert_eq!(expiry, ms(1700));

        assert!(!queue.prune(ms(1699)));
        assert!(queue.prune(ms(1700)));
        assert!(queue.is_empty());
    }

    #[test]
    fn only_newest_toasts_are_visible() {
        let mut queue = ToastQueue::new();
        for i in 0..5 {
            queue.push(Notification::error(format!("e{i}")), ms(i));
        }
        let shown: Vec<_> = queue
            .visible()
            .map(|t| t.notification.message.as_str())
            .collect();
        assert_eq!(shown, ["e2", "e3", "e4"]);
        assert_eq!(queue.next_deadline(), Some(DEFAULT_TOAST));
    }

    #[test]
    fn missing_record_becomes_generic_notification() {
        let note = Notification::from(MissingDetailRecord);
        assert_eq!(note.message, "An error occurred while loading the image.");
        assert_eq!(note.lifetime, DEFAULT_TOAST);
    }
}
