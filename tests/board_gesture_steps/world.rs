//! Shared world state for board gesture BDD scenarios.

use std::sync::Arc;

use jalan_board::board::{
    adapters::memory::InMemoryNotificationLog,
    config::BoardConfig,
    domain::{Board, ColumnId},
    services::{TaskBoardError, TaskBoardService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = TaskBoardService<DefaultClock>;

/// Scenario world for board gesture behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub log: InMemoryNotificationLog,
    pub baseline: Option<Board>,
    pub last_error: Option<TaskBoardError>,
}

impl BoardWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        let log = InMemoryNotificationLog::new();
        let service = TaskBoardService::new(
            BoardConfig::default(),
            Arc::new(log.clone()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            log,
            baseline: None,
            last_error: None,
        }
    }

    /// Records the error of a failed operation, clearing any earlier one.
    pub fn record<T>(&mut self, result: Result<T, TaskBoardError>) {
        self.last_error = result.err();
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a column identifier written in a feature file.
///
/// # Errors
///
/// Returns an error when the text names no column.
pub fn parse_column(column: &str) -> Result<ColumnId, eyre::Report> {
    ColumnId::try_from(column).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}
