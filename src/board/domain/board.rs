//! Board aggregate: the fixed partition of tasks into ordered columns.

use super::{BoardDomainError, ColumnId, Task, TaskFields, TaskId};
use serde::Serialize;

/// Ordered bucket of tasks for one workflow stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            tasks: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tasks in ranked order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the index of a task within the column.
    #[must_use]
    pub fn position(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }
}

/// Location of a task on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TaskPosition {
    /// Column holding the task.
    pub column: ColumnId,
    /// Zero-based index within the column.
    pub index: usize,
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The destination equals the current position; nothing changed.
    Unchanged(TaskPosition),
    /// The task now sits at `to`.
    Moved {
        /// Position before the move.
        from: TaskPosition,
        /// Position after the move.
        to: TaskPosition,
    },
}

/// A task taken off the board together with the column it left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedTask {
    /// Column the task was removed from.
    pub column: ColumnId,
    /// The removed task.
    pub task: Task,
}

/// Aggregate task counts shown above the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    /// Tasks across every column.
    pub total: usize,
    /// Tasks flagged as high priority.
    pub high_priority: usize,
    /// Tasks being surveyed or scheduled for maintenance.
    pub in_progress: usize,
    /// Tasks in the completed column.
    pub completed: usize,
}

/// Every task on the board, partitioned into the fixed set of columns.
///
/// Each task lives in exactly one column and task identifiers are unique
/// across the board. Mutations validate fully before touching any column,
/// so a rejected operation leaves the board as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Board {
    new_priority: Column,
    survey_dispatched: Column,
    maintenance_scheduled: Column,
    completed: Column,
}

impl Board {
    /// Creates an empty board, asking `title_for` for each column title.
    #[must_use]
    pub fn new(mut title_for: impl FnMut(ColumnId) -> String) -> Self {
        Self {
            new_priority: Column::new(ColumnId::NewPriority, title_for(ColumnId::NewPriority)),
            survey_dispatched: Column::new(
                ColumnId::SurveyDispatched,
                title_for(ColumnId::SurveyDispatched),
            ),
            maintenance_scheduled: Column::new(
                ColumnId::MaintenanceScheduled,
                title_for(ColumnId::MaintenanceScheduled),
            ),
            completed: Column::new(ColumnId::Completed, title_for(ColumnId::Completed)),
        }
    }

    /// Returns a column by identifier.
    #[must_use]
    pub const fn column(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::NewPriority => &self.new_priority,
            ColumnId::SurveyDispatched => &self.survey_dispatched,
            ColumnId::MaintenanceScheduled => &self.maintenance_scheduled,
            ColumnId::Completed => &self.completed,
        }
    }

    const fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::NewPriority => &mut self.new_priority,
            ColumnId::SurveyDispatched => &mut self.survey_dispatched,
            ColumnId::MaintenanceScheduled => &mut self.maintenance_scheduled,
            ColumnId::Completed => &mut self.completed,
        }
    }

    /// Iterates over columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        ColumnId::ALL.into_iter().map(|id| self.column(id))
    }

    /// Iterates over every task, column by column.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns().flat_map(|column| column.tasks.iter())
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns().map(Column::len).sum()
    }

    /// Returns whether every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns().all(Column::is_empty)
    }

    /// Finds where a task currently sits.
    #[must_use]
    pub fn locate(&self, task_id: TaskId) -> Option<TaskPosition> {
        self.columns().find_map(|column| {
            column.position(task_id).map(|index| TaskPosition {
                column: column.id,
                index,
            })
        })
    }

    /// Returns a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks().find(|task| task.id() == task_id)
    }

    /// Returns the identifier a newly created task should receive.
    ///
    /// This is one past the highest numeric suffix on the board, or
    /// `task-1` for an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskIdSpaceExhausted`] when the highest
    /// suffix is `u64::MAX`.
    pub fn next_task_id(&self) -> Result<TaskId, BoardDomainError> {
        self.tasks()
            .map(Task::id)
            .max()
            .map_or(Ok(TaskId::from_number(1)), TaskId::successor)
    }

    /// Appends a task to the end of a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when a task with the same
    /// identifier is already on the board.
    pub fn push_task(&mut self, column: ColumnId, task: Task) -> Result<TaskPosition, BoardDomainError> {
        if self.locate(task.id()).is_some() {
            return Err(BoardDomainError::DuplicateTask(task.id()));
        }
        let target = self.column_mut(column);
        target.tasks.push(task);
        Ok(TaskPosition {
            column,
            index: target.tasks.len().saturating_sub(1),
        })
    }

    /// Moves a task from `source` into `target` at `target_index`.
    ///
    /// The task is removed first and then inserted, so for a move within
    /// one column the index addresses the list without the moved task; an
    /// index equal to the column length appends. When `status_label` is
    /// `Some`, the task's status is replaced with it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no column holds the
    /// task, [`BoardDomainError::TaskNotInColumn`] when it sits in a
    /// different column than `source`, and
    /// [`BoardDomainError::IndexOutOfRange`] when `target_index` exceeds the
    /// target column length.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        source: ColumnId,
        target: ColumnId,
        target_index: usize,
        status_label: Option<&str>,
    ) -> Result<MoveOutcome, BoardDomainError> {
        let from_index = self.column(source).position(task_id).ok_or_else(|| {
            if self.locate(task_id).is_some() {
                BoardDomainError::TaskNotInColumn {
                    task_id,
                    column: source,
                }
            } else {
                BoardDomainError::TaskNotFound(task_id)
            }
        })?;

        let target_len = self.column(target).len();
        if target_index > target_len {
            return Err(BoardDomainError::IndexOutOfRange {
                column: target,
                index: target_index,
                len: target_len,
            });
        }

        let from = TaskPosition {
            column: source,
            index: from_index,
        };
        let insert_index = if source == target {
            target_index.min(target_len.saturating_sub(1))
        } else {
            target_index
        };
        let to = TaskPosition {
            column: target,
            index: insert_index,
        };
        if from == to {
            return Ok(MoveOutcome::Unchanged(from));
        }

        let mut task = self.column_mut(source).tasks.remove(from_index);
        if let Some(label) = status_label {
            task.set_status(label);
        }
        self.column_mut(target).tasks.insert(insert_index, task);
        Ok(MoveOutcome::Moved { from, to })
    }

    /// Replaces the editable fields of a task in place.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no column holds the
    /// task.
    pub fn update_task(&mut self, task_id: TaskId, fields: TaskFields) -> Result<&Task, BoardDomainError> {
        let position = self
            .locate(task_id)
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;
        let task = self
            .column_mut(position.column)
            .tasks
            .get_mut(position.index)
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;
        task.apply_fields(fields);
        Ok(task)
    }

    /// Removes the first task with the given identifier.
    ///
    /// Returns `None` when the board does not hold the task.
    pub fn remove_task(&mut self, task_id: TaskId) -> Option<RemovedTask> {
        let position = self.locate(task_id)?;
        let task = self.column_mut(position.column).tasks.remove(position.index);
        Some(RemovedTask {
            column: position.column,
            task,
        })
    }

    /// Computes the aggregate counts shown above the board.
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        BoardStats {
            total: self.len(),
            high_priority: self.tasks().filter(|task| task.is_high_priority()).count(),
            in_progress: self.survey_dispatched.len() + self.maintenance_scheduled.len(),
            completed: self.completed.len(),
        }
    }
}
