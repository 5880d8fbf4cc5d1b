//! Shared helpers for in-memory board integration tests.

use std::sync::Arc;

use jalan_board::board::{
    adapters::memory::{InMemoryNotificationLog, sample_board},
    config::BoardConfig,
    domain::{Board, ColumnId, TaskId},
    services::TaskBoardService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the integration tests.
pub type TestBoardService = TaskBoardService<DefaultClock>;

/// A board service paired with the log receiving its notifications.
pub struct BoardHarness {
    pub service: TestBoardService,
    pub log: InMemoryNotificationLog,
}

/// Provides a service seeded with the sample board.
#[fixture]
pub fn harness() -> BoardHarness {
    let config = BoardConfig::default();
    let board = sample_board(&config).expect("sample board should be valid");
    let log = InMemoryNotificationLog::new();
    let service =
        TaskBoardService::with_board(board, config, Arc::new(log.clone()), Arc::new(DefaultClock));
    BoardHarness { service, log }
}

/// Returns the task identifiers of a column as plain numbers, in order.
#[must_use]
pub fn column_numbers(board: &Board, column: ColumnId) -> Vec<u64> {
    board
        .column(column)
        .tasks()
        .iter()
        .map(|task| task.id().number())
        .collect()
}

/// Returns every task identifier on the board, sorted.
#[must_use]
pub fn sorted_ids(board: &Board) -> Vec<TaskId> {
    let mut ids: Vec<TaskId> = board.tasks().map(|task| task.id()).collect();
    ids.sort_unstable();
    ids
}
