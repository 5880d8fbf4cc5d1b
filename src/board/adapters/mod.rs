//! Adapter implementations for board ports.

pub mod memory;
pub mod tracing_sink;

pub use tracing_sink::TracingNotificationSink;
