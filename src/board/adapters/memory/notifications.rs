//! In-memory notification log for tests and embedding callers.

use std::sync::{Arc, PoisonError, RwLock};

use crate::board::{domain::Notification, ports::NotificationSink};

/// Thread-safe notification sink that keeps every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationLog {
    entries: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every notification received so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Notification> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Removes and returns every notification received so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.write().unwrap_or_else(PoisonError::into_inner))
    }
}

impl NotificationSink for InMemoryNotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
