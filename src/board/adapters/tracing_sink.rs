//! Notification sink that forwards notifications to `tracing`.

use tracing::{error, info};

use crate::board::{
    domain::{Notification, Severity},
    ports::NotificationSink,
};

/// Logs every notification as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.severity() {
            Severity::Info => info!(
                title = notification.title(),
                "{}",
                notification.message()
            ),
            Severity::Error => error!(
                title = notification.title(),
                "{}",
                notification.message()
            ),
        }
    }
}
