//! Autosave indicator shown after a task is moved.
//!
//! The indicator is purely cosmetic: it reports "saving" for a fixed delay
//! after each move and never gates or delays other operations.

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Time-based "saving…" indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveIndicator {
    delay: Duration,
    saving_until: Option<DateTime<Utc>>,
}

impl AutosaveIndicator {
    /// Creates an idle indicator that stays visible for `delay` per trigger.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            saving_until: None,
        }
    }

    /// Returns the configured visibility delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Shows the indicator from `now`, restarting the delay if it is
    /// already visible.
    pub fn trigger(&mut self, now: DateTime<Utc>) {
        let delay = TimeDelta::from_std(self.delay).unwrap_or(TimeDelta::MAX);
        self.saving_until = Some(now.checked_add_signed(delay).unwrap_or(DateTime::<Utc>::MAX_UTC));
    }

    /// Returns whether the indicator is visible at `now`.
    #[must_use]
    pub fn is_saving_at(&self, now: DateTime<Utc>) -> bool {
        self.saving_until.is_some_and(|until| now < until)
    }

    /// Returns how long the indicator remains visible after `now`.
    #[must_use]
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.saving_until
            .filter(|until| now < *until)
            .and_then(|until| (until - now).to_std().ok())
    }
}
