//! Application services for task board orchestration.

mod autosave;
mod form;
mod manager;

pub use autosave::AutosaveIndicator;
pub use form::TaskForm;
pub use manager::{GestureOutcome, TaskBoardError, TaskBoardResult, TaskBoardService};
