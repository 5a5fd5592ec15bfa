//! User-facing save notifications
//!
//! The pipeline reports every save and delete outcome through a
//! [`NotificationSink`] so the UI layer can show toasts. The default sink
//! writes to the log; tests use [`RecordingNotifier`] to assert on what
//! the user would have seen.

use parking_lot::Mutex;
use tracing::{info, warn};

/// Receiver of user-facing outcome messages.
pub trait NotificationSink: Send + Sync {
    /// Announce a successful operation.
    fn notify_success(&self, message: &str);

    /// Announce a failed operation.
    fn notify_error(&self, message: &str);
}

/// Sink that writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify_success(&self, message: &str) {
        info!(message, "notification");
    }

    fn notify_error(&self, message: &str) {
        warn!(message, "notification");
    }
}

/// Which way a notification went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The operation succeeded
    Success,
    /// The operation failed
    Error,
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Success or error
    pub kind: NotificationKind,
    /// The user-facing message
    pub message: String,
}

/// Sink that records notifications for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification in delivery order.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    /// Messages of successful outcomes, in delivery order.
    #[must_use]
    pub fn successes(&self) -> Vec<String> {
        self.of_kind(NotificationKind::Success)
    }

    /// Messages of failed outcomes, in delivery order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.of_kind(NotificationKind::Error)
    }

    /// Number of recorded notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.lock().is_empty()
    }

    fn of_kind(&self, kind: NotificationKind) -> Vec<String> {
        self.notifications
            .lock()
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }

    fn push(&self, kind: NotificationKind, message: &str) {
        self.notifications.lock().push(Notification {
            kind,
            message: message.to_string(),
        });
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.push(NotificationKind::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.push(NotificationKind::Error, message);
    }
}
