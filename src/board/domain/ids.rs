//! Identifier types for tasks and board columns.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const TASK_ID_PREFIX: &str = "task-";

/// Stable identifier of a task in `task-<number>` form.
///
/// The numeric suffix drives identifier generation, so it is stored
/// directly rather than as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task identifier from its numeric suffix.
    #[must_use]
    pub const fn from_number(number: u64) -> Self {
        Self(number)
    }

    /// Returns the numeric suffix.
    #[must_use]
    pub const fn number(self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskIdSpaceExhausted`] when the suffix is
    /// already `u64::MAX`.
    pub const fn successor(self) -> Result<Self, BoardDomainError> {
        match self.0.checked_add(1) {
            Some(next) => Ok(Self(next)),
            None => Err(BoardDomainError::TaskIdSpaceExhausted(self)),
        }
    }
}

impl FromStr for TaskId {
    type Err = BoardDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let suffix = value
            .trim()
            .strip_prefix(TASK_ID_PREFIX)
            .filter(|digits| is_canonical_number(digits))
            .ok_or_else(|| BoardDomainError::InvalidTaskId(value.to_owned()))?;
        suffix
            .parse::<u64>()
            .map(Self)
            .map_err(|_| BoardDomainError::InvalidTaskId(value.to_owned()))
    }
}

/// Accepts ASCII digits without leading zeros, so each number has one
/// spelling and ids survive a text round trip.
fn is_canonical_number(digits: &str) -> bool {
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
}

impl TryFrom<String> for TaskId {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TASK_ID_PREFIX}{}", self.0)
    }
}

/// Workflow stage a column represents.
///
/// Declaration order is the board's display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    /// Newly reported, prioritised damage awaiting dispatch.
    NewPriority,
    /// A survey team has been sent to the site.
    SurveyDispatched,
    /// Repair work is scheduled.
    MaintenanceScheduled,
    /// Repair work is finished.
    Completed,
}

impl ColumnId {
    /// Every column, in display order.
    pub const ALL: [Self; 4] = [
        Self::NewPriority,
        Self::SurveyDispatched,
        Self::MaintenanceScheduled,
        Self::Completed,
    ];

    /// Returns the canonical identifier string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewPriority => "new-priority",
            Self::SurveyDispatched => "survey-dispatched",
            Self::MaintenanceScheduled => "maintenance-scheduled",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == normalized)
            .ok_or_else(|| BoardDomainError::UnknownColumn(value.to_owned()))
    }
}

impl FromStr for ColumnId {
    type Err = BoardDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
