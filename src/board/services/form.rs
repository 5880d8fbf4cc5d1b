//! Form record submitted by the presentation layer for create and edit.

use serde::{Deserialize, Serialize};

use crate::board::{
    config::BoardConfig,
    domain::{BoardDomainError, EstimatedDuration, PriorityScore, StreetName, Task, TaskFields, parse_team},
};

/// Raw task form fields as the presentation layer submits them.
///
/// Every field is plain text (apart from the high-priority switch) and is
/// only validated when converted into [`TaskFields`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskForm {
    street_name: String,
    priority_score: String,
    team: String,
    is_high_priority: bool,
    estimated_duration: String,
    description: String,
    location: String,
}

impl TaskForm {
    /// Creates a form with the required street name and blank optional
    /// fields.
    #[must_use]
    pub fn new(street_name: impl Into<String>) -> Self {
        Self {
            street_name: street_name.into(),
            ..Self::default()
        }
    }

    /// Pre-fills a form from an existing task for editing.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            street_name: task.street_name().to_string(),
            priority_score: task.priority_score().to_string(),
            team: task.team().join(", "),
            is_high_priority: task.is_high_priority(),
            estimated_duration: task.estimated_duration().as_str().to_owned(),
            description: task.description().unwrap_or_default().to_owned(),
            location: task.location().unwrap_or_default().to_owned(),
        }
    }

    /// Sets the priority score text, e.g. `"8.5"`.
    #[must_use]
    pub fn with_priority_score(mut self, priority_score: impl Into<String>) -> Self {
        self.priority_score = priority_score.into();
        self
    }

    /// Sets the comma-separated team list.
    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    /// Sets the high-priority flag.
    #[must_use]
    pub const fn with_high_priority(mut self, is_high_priority: bool) -> Self {
        self.is_high_priority = is_high_priority;
        self
    }

    /// Sets the estimated duration label, e.g. `"2 hari"`.
    #[must_use]
    pub fn with_estimated_duration(mut self, estimated_duration: impl Into<String>) -> Self {
        self.estimated_duration = estimated_duration.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Returns the street name as entered.
    #[must_use]
    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    /// Returns the team list as entered.
    #[must_use]
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Validates the form, filling blank optional fields from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyStreetName`] when the street name is
    /// blank, [`BoardDomainError::InvalidPriorityScore`] for a score that is
    /// not a number in `1.0..=10.0`, and
    /// [`BoardDomainError::UnknownDuration`] for an unsupported duration.
    pub fn into_fields(self, config: &BoardConfig) -> Result<TaskFields, BoardDomainError> {
        let street_name = StreetName::new(self.street_name)?;
        let priority_score = if self.priority_score.trim().is_empty() {
            config.default_priority
        } else {
            PriorityScore::parse(&self.priority_score)?
        };
        let estimated_duration = if self.estimated_duration.trim().is_empty() {
            config.default_duration
        } else {
            EstimatedDuration::try_from(self.estimated_duration.as_str())?
        };

        Ok(TaskFields {
            street_name,
            priority_score,
            team: parse_team(&self.team),
            is_high_priority: self.is_high_priority,
            estimated_duration,
            description: non_blank(self.description),
            location: non_blank(self.location),
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_owned())
    }
}
