//! Notification port through which the board reports operation outcomes.

use crate::board::domain::Notification;

/// Receives a notification for every board operation outcome.
///
/// Delivery is fire-and-forget: the board never waits on or inspects the
/// sink, so implementations must not block.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    /// Delivers one notification.
    fn notify(&self, notification: Notification);
}
