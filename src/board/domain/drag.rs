//! Drag-and-drop gesture state machine.
//!
//! Hover updates are speculative: they only move the candidate drop target
//! and never touch the board. A drop is the single exit that produces a
//! move; a cancel returns to idle with nothing applied.

use super::{ColumnId, GestureError, TaskId, TaskPosition};
use serde::{Deserialize, Serialize};

/// Gesture events captured by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    /// The pointer picked up a task card.
    DragStart {
        /// Task being dragged.
        task_id: TaskId,
    },
    /// The dragged card is over a candidate position.
    DragHover {
        /// Task being dragged.
        task_id: TaskId,
        /// Column under the pointer.
        column: ColumnId,
        /// Candidate insertion index.
        index: usize,
    },
    /// The card was released over a column.
    Drop {
        /// Task being dragged.
        task_id: TaskId,
        /// Column receiving the task.
        column: ColumnId,
        /// Insertion index.
        index: usize,
    },
    /// The drag ended outside any column.
    Cancel,
}

/// Current phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task was picked up and has not hovered a target yet.
    Dragging {
        /// Task being dragged.
        task_id: TaskId,
        /// Where the task sat when the drag began.
        origin: TaskPosition,
    },
    /// A task is hovering over a candidate drop position.
    Hovering {
        /// Task being dragged.
        task_id: TaskId,
        /// Where the task sat when the drag began.
        origin: TaskPosition,
        /// Position the task would take if dropped now.
        candidate: TaskPosition,
    },
}

/// Task and origin released by a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragRelease {
    /// Task being dropped.
    pub task_id: TaskId,
    /// Where the task sat when the drag began.
    pub origin: TaskPosition,
}

impl DragState {
    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging { task_id, .. } | Self::Hovering { task_id, .. } => Some(*task_id),
        }
    }

    /// Returns whether a drag is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Begins dragging a task from `origin`, replacing any active drag.
    pub const fn start(&mut self, task_id: TaskId, origin: TaskPosition) {
        *self = Self::Dragging { task_id, origin };
    }

    /// Records a speculative drop target.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::NotDragging`] while idle and
    /// [`GestureError::TaskMismatch`] when `task_id` is not the dragged
    /// task. The state is unchanged on error.
    pub fn hover(&mut self, task_id: TaskId, candidate: TaskPosition) -> Result<(), GestureError> {
        let release = self.expect_task(task_id)?;
        *self = Self::Hovering {
            task_id,
            origin: release.origin,
            candidate,
        };
        Ok(())
    }

    /// Ends the drag for a drop, returning to idle.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::NotDragging`] while idle and
    /// [`GestureError::TaskMismatch`] when `task_id` is not the dragged
    /// task. The state is unchanged on error.
    pub fn release(&mut self, task_id: TaskId) -> Result<DragRelease, GestureError> {
        let release = self.expect_task(task_id)?;
        *self = Self::Idle;
        Ok(release)
    }

    /// Abandons any active drag. Returns the task that was being dragged.
    pub const fn cancel(&mut self) -> Option<TaskId> {
        let task_id = self.task_id();
        *self = Self::Idle;
        task_id
    }

    fn expect_task(&self, task_id: TaskId) -> Result<DragRelease, GestureError> {
        match *self {
            Self::Idle => Err(GestureError::NotDragging),
            Self::Dragging {
                task_id: expected,
                origin,
            }
            | Self::Hovering {
                task_id: expected,
                origin,
                ..
            } => {
                if expected == task_id {
                    Ok(DragRelease { task_id, origin })
                } else {
                    Err(GestureError::TaskMismatch {
                        expected,
                        actual: task_id,
                    })
                }
            }
        }
    }
}
