//! Task board state manager: the single writer of board state.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::board::{
    config::BoardConfig,
    domain::{
        Board, BoardDomainError, BoardErrorKind, BoardStats, ColumnId, DragState, GestureError,
        GestureEvent, MoveOutcome, Notification, RemovedTask, Task, TaskId, TaskPosition,
    },
    ports::NotificationSink,
    services::{AutosaveIndicator, TaskForm},
};

/// Service-level errors for board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskBoardError {
    /// Domain validation or lookup failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// A gesture event arrived out of order.
    #[error(transparent)]
    Gesture(#[from] GestureError),
}

impl TaskBoardError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::Gesture(_) => BoardErrorKind::Validation,
        }
    }
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// What a gesture event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A drag began from the given position.
    Started(TaskPosition),
    /// The candidate drop position changed.
    Hovering(TaskPosition),
    /// The drag ended in a drop.
    Dropped(MoveOutcome),
    /// The drag was abandoned; carries the task that was being dragged.
    Cancelled(Option<TaskId>),
}

/// Owns the board and applies every mutation to it.
///
/// Operations run synchronously to completion and either apply fully or
/// leave the board untouched. Each outcome is reported through the
/// [`NotificationSink`] as well as returned to the caller.
pub struct TaskBoardService<C>
where
    C: Clock + Send + Sync,
{
    board: Board,
    config: BoardConfig,
    drag: DragState,
    pending_deletion: Option<TaskId>,
    autosave: AutosaveIndicator,
    notifier: Arc<dyn NotificationSink>,
    clock: Arc<C>,
}

impl<C> TaskBoardService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a service over an empty board.
    #[must_use]
    pub fn new(config: BoardConfig, notifier: Arc<dyn NotificationSink>, clock: Arc<C>) -> Self {
        let board = Board::new(|column| config.column_title(column).to_owned());
        Self::with_board(board, config, notifier, clock)
    }

    /// Creates a service over an existing board.
    #[must_use]
    pub fn with_board(
        board: Board,
        config: BoardConfig,
        notifier: Arc<dyn NotificationSink>,
        clock: Arc<C>,
    ) -> Self {
        let autosave = AutosaveIndicator::new(config.autosave_delay());
        Self {
            board,
            config,
            drag: DragState::Idle,
            pending_deletion: None,
            autosave,
            notifier,
            clock,
        }
    }

    /// Returns the current board for rendering.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns an owned copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the aggregate task counts.
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        self.board.stats()
    }

    /// Returns the current drag gesture phase.
    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Returns the task awaiting delete confirmation, if any.
    #[must_use]
    pub const fn pending_deletion(&self) -> Option<TaskId> {
        self.pending_deletion
    }

    /// Returns the autosave indicator.
    #[must_use]
    pub const fn autosave(&self) -> &AutosaveIndicator {
        &self.autosave
    }

    /// Returns whether the autosave indicator is currently visible.
    #[must_use]
    pub fn is_autosaving(&self) -> bool {
        self.autosave.is_saving_at(self.clock.utc())
    }

    /// Sleeps until the autosave indicator clears.
    ///
    /// Nothing depends on this; it exists for callers that want to show the
    /// indicator for its full duration.
    pub async fn wait_for_autosave(&self) {
        if let Some(remaining) = self.autosave.remaining_at(self.clock.utc()) {
            tokio::time::sleep(remaining).await;
        }
    }

    /// Moves a task to `target_index` of `target`.
    ///
    /// The task's status becomes the label configured for `target`; a
    /// column without a label leaves the status unchanged. Every call
    /// restarts the autosave indicator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the task is not in `source`
    /// or `target_index` exceeds the target column length. The board is
    /// unchanged on error.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        source: ColumnId,
        target: ColumnId,
        target_index: usize,
    ) -> TaskBoardResult<MoveOutcome> {
        self.autosave.trigger(self.clock.utc());
        let result = self
            .board
            .move_task(
                task_id,
                source,
                target,
                target_index,
                self.config.status_label(target),
            )
            .map_err(TaskBoardError::from);

        self.report(result, "Move rejected", |outcome| match *outcome {
            MoveOutcome::Moved { from, to } => {
                info!(
                    task_id = %task_id,
                    from_column = %from.column,
                    from_index = from.index,
                    to_column = %to.column,
                    to_index = to.index,
                    "moved task"
                );
                Some(Notification::info(
                    "Task updated",
                    "Task position saved automatically.",
                ))
            }
            MoveOutcome::Unchanged(position) => {
                debug!(task_id = %task_id, column = %position.column, index = position.index, "move left task in place");
                None
            }
        })
    }

    /// Creates a task from a form and appends it to the intake column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the form fails validation.
    /// The board is unchanged on error.
    pub fn create_task(&mut self, form: TaskForm) -> TaskBoardResult<Task> {
        let result = self.apply_create(form);
        self.report(result, "Task not created", |task| {
            info!(task_id = %task.id(), street = %task.street_name(), "created task");
            Some(Notification::info(
                "Task created",
                format!("{} was added to the board.", task.street_name()),
            ))
        })
    }

    fn apply_create(&mut self, form: TaskForm) -> TaskBoardResult<Task> {
        let fields = form.into_fields(&self.config)?;
        let id = self.board.next_task_id()?;
        let intake = self.config.intake_column;
        let status = self.config.status_label(intake).unwrap_or_default();
        let task = Task::new(id, fields, status, &*self.clock);
        self.board.push_task(intake, task.clone())?;
        Ok(task)
    }

    /// Replaces the editable fields of a task from a form.
    ///
    /// Identity, status, assignment date, column and position are kept.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the form fails validation or
    /// the task is not on the board. The board is unchanged on error.
    pub fn update_task(&mut self, task_id: TaskId, form: TaskForm) -> TaskBoardResult<Task> {
        let result = form
            .into_fields(&self.config)
            .and_then(|fields| self.board.update_task(task_id, fields).cloned())
            .map_err(TaskBoardError::from);
        self.report(result, "Task not updated", |task| {
            info!(task_id = %task.id(), "updated task");
            Some(Notification::info(
                "Task updated",
                format!("{} was updated.", task.street_name()),
            ))
        })
    }

    /// Marks a task for deletion pending confirmation.
    ///
    /// A later request replaces an earlier one.
    pub fn request_delete(&mut self, task_id: TaskId) {
        debug!(task_id = %task_id, "delete requested");
        self.pending_deletion = Some(task_id);
    }

    /// Clears the pending deletion without removing anything.
    pub fn cancel_delete(&mut self) -> Option<TaskId> {
        let cancelled = self.pending_deletion.take();
        if let Some(task_id) = cancelled {
            debug!(task_id = %task_id, "delete cancelled");
        }
        cancelled
    }

    /// Removes the task pending deletion.
    ///
    /// Returns `None` without error when nothing is pending or the pending
    /// task is no longer on the board. The pending mark is cleared either
    /// way.
    pub fn confirm_delete(&mut self) -> Option<RemovedTask> {
        let task_id = self.pending_deletion.take()?;
        let Some(removed) = self.board.remove_task(task_id) else {
            debug!(task_id = %task_id, "delete confirmed for a task no longer on the board");
            return None;
        };
        if self.drag.task_id() == Some(task_id) {
            self.drag.cancel();
        }

        info!(task_id = %task_id, column = %removed.column, "deleted task");
        self.notifier.notify(Notification::info(
            "Task deleted",
            format!(
                "{} was removed from {}.",
                removed.task.street_name(),
                self.config.column_title(removed.column)
            ),
        ));
        Some(removed)
    }

    /// Feeds one gesture event into the drag state machine.
    ///
    /// Only a drop changes the board, through [`Self::move_task`] from the
    /// column the task currently sits in.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Gesture`] for hover or drop events without
    /// a matching drag, [`TaskBoardError::Domain`] when a drag starts on a
    /// task that is not on the board, and any error of
    /// [`Self::move_task`] for a drop.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> TaskBoardResult<GestureOutcome> {
        match event {
            GestureEvent::DragStart { task_id } => {
                let result = self
                    .board
                    .locate(task_id)
                    .ok_or(BoardDomainError::TaskNotFound(task_id))
                    .map_err(TaskBoardError::from);
                let origin = self.report(result, "Drag rejected", |_| None)?;
                if let Some(previous) = self.drag.task_id() {
                    debug!(task_id = %previous, "replacing active drag");
                }
                self.drag.start(task_id, origin);
                debug!(task_id = %task_id, column = %origin.column, index = origin.index, "drag started");
                Ok(GestureOutcome::Started(origin))
            }
            GestureEvent::DragHover {
                task_id,
                column,
                index,
            } => {
                let candidate = TaskPosition { column, index };
                let result = self
                    .drag
                    .hover(task_id, candidate)
                    .map_err(TaskBoardError::from);
                self.report(result, "Drag rejected", |_| None)?;
                Ok(GestureOutcome::Hovering(candidate))
            }
            GestureEvent::Drop {
                task_id,
                column,
                index,
            } => {
                let result = self.drag.release(task_id).map_err(TaskBoardError::from);
                let release = self.report(result, "Drop rejected", |_| None)?;
                // The task may have moved since the drag started.
                let source = self
                    .board
                    .locate(task_id)
                    .map_or(release.origin.column, |position| position.column);
                debug!(task_id = %task_id, column = %column, index, "drag dropped");
                self.move_task(task_id, source, column, index)
                    .map(GestureOutcome::Dropped)
            }
            GestureEvent::Cancel => {
                let cancelled = self.drag.cancel();
                debug!(task_id = ?cancelled.map(|id| id.to_string()), "drag cancelled");
                Ok(GestureOutcome::Cancelled(cancelled))
            }
        }
    }

    fn report<T>(
        &self,
        result: TaskBoardResult<T>,
        failure_title: &str,
        on_success: impl FnOnce(&T) -> Option<Notification>,
    ) -> TaskBoardResult<T> {
        match result {
            Ok(value) => {
                if let Some(notification) = on_success(&value) {
                    self.notifier.notify(notification);
                }
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, kind = ?err.kind(), "{failure_title}");
                self.notifier
                    .notify(Notification::error(failure_title, err.to_string()));
                Err(err)
            }
        }
    }
}
