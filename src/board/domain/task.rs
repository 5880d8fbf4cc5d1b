//! Maintenance task entity and its editable field set.

use super::{EstimatedDuration, PriorityScore, StreetName, TaskId};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated editable fields of a task.
///
/// Creating and editing a task both go through this type; identity,
/// status and assignment date are never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    /// Street the maintenance work targets.
    pub street_name: StreetName,
    /// Priority score between 1.0 and 10.0.
    pub priority_score: PriorityScore,
    /// Member identifiers of the assigned team, in display order.
    pub team: Vec<String>,
    /// Whether the task is flagged as high priority.
    pub is_high_priority: bool,
    /// Estimated effort.
    pub estimated_duration: EstimatedDuration,
    /// Free-text description.
    pub description: Option<String>,
    /// Free-text location.
    pub location: Option<String>,
}

impl TaskFields {
    /// Creates a field set with the given street name and neutral defaults.
    #[must_use]
    pub fn new(street_name: StreetName) -> Self {
        Self {
            street_name,
            priority_score: PriorityScore::default(),
            team: Vec::new(),
            is_high_priority: false,
            estimated_duration: EstimatedDuration::default(),
            description: None,
            location: None,
        }
    }
}

/// A unit of maintenance work tracked on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    street_name: StreetName,
    priority_score: PriorityScore,
    team: Vec<String>,
    is_high_priority: bool,
    status: String,
    assigned_date: NaiveDate,
    estimated_duration: EstimatedDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

/// Parameter object for reconstructing a task from stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored identifier.
    pub id: TaskId,
    /// Stored editable fields.
    pub fields: TaskFields,
    /// Stored status label.
    pub status: String,
    /// Stored assignment date.
    pub assigned_date: NaiveDate,
}

impl Task {
    /// Creates a new task assigned today.
    #[must_use]
    pub fn new(
        id: TaskId,
        fields: TaskFields,
        status: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self::from_persisted(PersistedTaskData {
            id,
            fields,
            status: status.into(),
            assigned_date: clock.utc().date_naive(),
        })
    }

    /// Reconstructs a task from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let TaskFields {
            street_name,
            priority_score,
            team,
            is_high_priority,
            estimated_duration,
            description,
            location,
        } = data.fields;
        Self {
            id: data.id,
            street_name,
            priority_score,
            team,
            is_high_priority,
            status: data.status,
            assigned_date: data.assigned_date,
            estimated_duration,
            description,
            location,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the street name.
    #[must_use]
    pub const fn street_name(&self) -> &StreetName {
        &self.street_name
    }

    /// Returns the priority score.
    #[must_use]
    pub const fn priority_score(&self) -> PriorityScore {
        self.priority_score
    }

    /// Returns the team member identifiers.
    #[must_use]
    pub fn team(&self) -> &[String] {
        &self.team
    }

    /// Returns whether the task is flagged as high priority.
    #[must_use]
    pub const fn is_high_priority(&self) -> bool {
        self.is_high_priority
    }

    /// Returns the status label derived from the task's column.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the assignment date.
    #[must_use]
    pub const fn assigned_date(&self) -> NaiveDate {
        self.assigned_date
    }

    /// Returns the estimated duration.
    #[must_use]
    pub const fn estimated_duration(&self) -> EstimatedDuration {
        self.estimated_duration
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the location, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns a copy of the editable fields.
    #[must_use]
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            street_name: self.street_name.clone(),
            priority_score: self.priority_score,
            team: self.team.clone(),
            is_high_priority: self.is_high_priority,
            estimated_duration: self.estimated_duration,
            description: self.description.clone(),
            location: self.location.clone(),
        }
    }

    /// Replaces every editable field, leaving identity, status and
    /// assignment date intact.
    pub(crate) fn apply_fields(&mut self, fields: TaskFields) {
        self.street_name = fields.street_name;
        self.priority_score = fields.priority_score;
        self.team = fields.team;
        self.is_high_priority = fields.is_high_priority;
        self.estimated_duration = fields.estimated_duration;
        self.description = fields.description;
        self.location = fields.location;
    }

    pub(crate) fn set_status(&mut self, status: &str) {
        status.clone_into(&mut self.status);
    }
}
