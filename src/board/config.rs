//! Board configuration: column labels, form defaults and autosave timing.
//!
//! Configuration is read from TOML. Every key is optional; missing keys take
//! the built-in defaults.
//!
//! ```toml
//! intake_column = "new-priority"
//! default_priority = 5.0
//! default_duration = "1 hari"
//! autosave_delay_ms = 1000
//!
//! [status_labels]
//! new-priority = "Baru"
//! completed = "Selesai"
//! ```

use crate::board::domain::{ColumnId, EstimatedDuration, PriorityScore};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading board configuration.
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The configuration file could not be read.
    #[error("failed to read board configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not valid TOML for this schema.
    #[error("failed to parse board configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The intake column has no status label, so new tasks would have none.
    #[error("intake column {0} has no status label")]
    MissingIntakeStatus(ColumnId),
}

/// Tunable behaviour of the task board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Column that receives newly created tasks.
    pub intake_column: ColumnId,
    /// Status label assigned to tasks entering each column.
    ///
    /// Columns without an entry leave a moved task's status untouched.
    pub status_labels: BTreeMap<ColumnId, String>,
    /// Display title for each column.
    pub column_titles: BTreeMap<ColumnId, String>,
    /// Priority applied when a form leaves the score blank.
    pub default_priority: PriorityScore,
    /// Duration applied when a form leaves the duration blank.
    pub default_duration: EstimatedDuration,
    /// How long the autosave indicator stays visible after a move.
    pub autosave_delay_ms: u64,
    /// Member initials offered when assigning teams.
    pub team_members: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            intake_column: ColumnId::NewPriority,
            status_labels: BTreeMap::from([
                (ColumnId::NewPriority, "Baru".to_owned()),
                (ColumnId::SurveyDispatched, "Sedang Berlangsung".to_owned()),
                (ColumnId::MaintenanceScheduled, "Dijadwalkan".to_owned()),
                (ColumnId::Completed, "Selesai".to_owned()),
            ]),
            column_titles: BTreeMap::from([
                (ColumnId::NewPriority, "Prioritas Baru".to_owned()),
                (ColumnId::SurveyDispatched, "Tim Survei Dikirim".to_owned()),
                (ColumnId::MaintenanceScheduled, "Pemeliharaan Terjadwal".to_owned()),
                (ColumnId::Completed, "Selesai".to_owned()),
            ]),
            default_priority: PriorityScore::MIDPOINT,
            default_duration: EstimatedDuration::OneDay,
            autosave_delay_ms: 1000,
            team_members: [
                "JD", "SM", "AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST", "UV",
                "WX", "YZ",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] for malformed TOML or unknown
    /// keys and [`BoardConfigError::MissingIntakeStatus`] when the intake
    /// column lacks a status label.
    pub fn from_toml_str(contents: &str) -> Result<Self, BoardConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Io`] when the file cannot be read, plus
    /// every error [`Self::from_toml_str`] can return.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BoardConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::MissingIntakeStatus`] when the intake
    /// column lacks a status label.
    pub fn validate(&self) -> Result<(), BoardConfigError> {
        if self.status_label(self.intake_column).is_none() {
            return Err(BoardConfigError::MissingIntakeStatus(self.intake_column));
        }
        Ok(())
    }

    /// Returns the status label for a column, if one is configured.
    #[must_use]
    pub fn status_label(&self, column: ColumnId) -> Option<&str> {
        self.status_labels.get(&column).map(String::as_str)
    }

    /// Returns the display title for a column, falling back to its
    /// identifier.
    #[must_use]
    pub fn column_title(&self, column: ColumnId) -> &str {
        self.column_titles
            .get(&column)
            .map_or_else(|| column.as_str(), String::as_str)
    }

    /// Returns the autosave indicator delay.
    #[must_use]
    pub const fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }
}
