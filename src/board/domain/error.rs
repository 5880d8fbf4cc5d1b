//! Error types for board domain validation, lookup and gesture handling.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Broad classification of board failures surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardErrorKind {
    /// A required field was empty or a value failed validation.
    Validation,
    /// A referenced task or column does not exist.
    NotFound,
    /// A positional argument fell outside the permitted bounds.
    OutOfRange,
}

/// Errors returned while constructing or mutating board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The street name is empty after trimming.
    #[error("street name must not be empty")]
    EmptyStreetName,

    /// The priority score is not a number in `1.0..=10.0`.
    #[error("invalid priority score '{0}', expected a number between 1 and 10")]
    InvalidPriorityScore(String),

    /// The estimated duration is not one of the supported labels.
    #[error("unknown estimated duration: {0}")]
    UnknownDuration(String),

    /// The task identifier does not follow `task-<number>` format.
    #[error("invalid task identifier '{0}', expected task-<number>")]
    InvalidTaskId(String),

    /// The column identifier is not part of the board.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// The calendar date could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// No column holds the task.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task exists but not in the column the caller named.
    #[error("task {task_id} is not in column {column}")]
    TaskNotInColumn {
        /// Task the caller referenced.
        task_id: TaskId,
        /// Column the caller expected the task in.
        column: ColumnId,
    },

    /// The insertion index exceeds the column length.
    #[error("index {index} is out of range for column {column} with {len} tasks")]
    IndexOutOfRange {
        /// Column receiving the task.
        column: ColumnId,
        /// Requested insertion index.
        index: usize,
        /// Number of tasks the index was checked against.
        len: usize,
    },

    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The numeric identifier space is exhausted.
    #[error("no task identifier is available after {0}")]
    TaskIdSpaceExhausted(TaskId),
}

impl BoardDomainError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        match self {
            Self::EmptyStreetName
            | Self::InvalidPriorityScore(_)
            | Self::UnknownDuration(_)
            | Self::InvalidTaskId(_)
            | Self::InvalidDate(_)
            | Self::DuplicateTask(_) => BoardErrorKind::Validation,
            Self::UnknownColumn(_) | Self::TaskNotFound(_) | Self::TaskNotInColumn { .. } => {
                BoardErrorKind::NotFound
            }
            Self::IndexOutOfRange { .. } | Self::TaskIdSpaceExhausted(_) => {
                BoardErrorKind::OutOfRange
            }
        }
    }
}

/// Errors raised when gesture events arrive out of protocol order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GestureError {
    /// A hover or drop arrived while no drag was active.
    #[error("no drag in progress")]
    NotDragging,

    /// The event names a different task than the one being dragged.
    #[error("gesture for task {actual} does not match dragged task {expected}")]
    TaskMismatch {
        /// Task captured at drag start.
        expected: TaskId,
        /// Task named by the event.
        actual: TaskId,
    },
}
