//! Domain model for the maintenance task board.
//!
//! The board domain models tasks, their partition into workflow columns,
//! the drag gesture state machine and operation notifications, keeping
//! configuration and delivery concerns outside of the domain boundary.

mod board;
mod drag;
mod error;
mod fields;
mod ids;
mod notification;
mod task;

pub use board::{Board, BoardStats, Column, MoveOutcome, RemovedTask, TaskPosition};
pub use drag::{DragRelease, DragState, GestureEvent};
pub use error::{BoardDomainError, BoardErrorKind, GestureError};
pub use fields::{EstimatedDuration, PriorityScore, StreetName, parse_team};
pub use ids::{ColumnId, TaskId};
pub use notification::{Notification, Severity};
pub use task::{PersistedTaskData, Task, TaskFields};
