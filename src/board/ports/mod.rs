//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod notifier;

pub use notifier::NotificationSink;

#[cfg(test)]
pub use notifier::MockNotificationSink;
