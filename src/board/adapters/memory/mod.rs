//! In-memory adapters: a notification log and the seeded sample board.

mod notifications;
mod sample;

pub use notifications::InMemoryNotificationLog;
pub use sample::sample_board;
