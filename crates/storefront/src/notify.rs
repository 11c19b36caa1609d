//! Transient user-facing notifications ("toasts").
//!
//! The cart store only asks for a message to be shown. Display and the
//! auto-dismiss timer belong to whichever [`Notifier`] is plugged in.

use std::cell::RefCell;
use std::time::Duration;

/// How long a toast stays visible unless configured otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// A message to show briefly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            duration,
        }
    }
}

/// Sink for notifications.
///
/// Delivery is fire-and-forget: a notifier cannot fail the operation that
/// raised the notification.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Emits notifications as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            dismiss_after_ms = u64::try_from(notification.duration.as_millis()).unwrap_or(u64::MAX),
            "{}",
            notification.message
        );
    }
}

/// Records notifications in memory so they can be inspected later.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: RefCell<Vec<Notification>>,
}

impl MemoryNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|n| n.message.clone()).collect()
    }

    /// Remove and return everything delivered so far.
    pub fn drain(&self) -> Vec<Notification> {
        self.sent.borrow_mut().drain(..).collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.borrow_mut().push(notification);
    }
}
