//! Seeded demonstration board used by the dashboard before any real data
//! source exists.

use chrono::NaiveDate;

use crate::board::{
    config::BoardConfig,
    domain::{
        Board, BoardDomainError, ColumnId, EstimatedDuration, PersistedTaskData, PriorityScore,
        StreetName, Task, TaskFields, TaskId,
    },
};

struct SampleTask {
    number: u64,
    column: ColumnId,
    street_name: &'static str,
    priority_tenths: u16,
    team: &'static [&'static str],
    is_high_priority: bool,
    assigned_date: &'static str,
    estimated_duration: EstimatedDuration,
}

const SAMPLE_TASKS: [SampleTask; 7] = [
    SampleTask {
        number: 1,
        column: ColumnId::NewPriority,
        street_name: "Jl. Sudirman Raya",
        priority_tenths: 95,
        team: &["JD", "SM", "AB"],
        is_high_priority: true,
        assigned_date: "2024-01-15",
        estimated_duration: EstimatedDuration::ThreeDays,
    },
    SampleTask {
        number: 2,
        column: ColumnId::NewPriority,
        street_name: "Jl. Kuningan Timur",
        priority_tenths: 81,
        team: &["AB", "CD"],
        is_high_priority: false,
        assigned_date: "2024-01-14",
        estimated_duration: EstimatedDuration::TwoDays,
    },
    SampleTask {
        number: 3,
        column: ColumnId::SurveyDispatched,
        street_name: "Jl. Thamrin Boulevard",
        priority_tenths: 92,
        team: &["EF", "GH", "IJ", "KL"],
        is_high_priority: true,
        assigned_date: "2024-01-13",
        estimated_duration: EstimatedDuration::FourDays,
    },
    SampleTask {
        number: 4,
        column: ColumnId::SurveyDispatched,
        street_name: "Jl. Senayan City Center",
        priority_tenths: 78,
        team: &["IJ", "KL"],
        is_high_priority: false,
        assigned_date: "2024-01-12",
        estimated_duration: EstimatedDuration::TwoDays,
    },
    SampleTask {
        number: 5,
        column: ColumnId::MaintenanceScheduled,
        street_name: "Jl. Gatot Subroto Extension",
        priority_tenths: 88,
        team: &["MN", "OP"],
        is_high_priority: false,
        assigned_date: "2024-01-11",
        estimated_duration: EstimatedDuration::FiveDays,
    },
    SampleTask {
        number: 6,
        column: ColumnId::Completed,
        street_name: "Jl. Rasuna Said Kav",
        priority_tenths: 85,
        team: &["QR", "ST"],
        is_high_priority: false,
        assigned_date: "2024-01-08",
        estimated_duration: EstimatedDuration::ThreeDays,
    },
    SampleTask {
        number: 7,
        column: ColumnId::Completed,
        street_name: "Jl. Casablanca Raya",
        priority_tenths: 72,
        team: &["UV", "WX", "YZ"],
        is_high_priority: false,
        assigned_date: "2024-01-05",
        estimated_duration: EstimatedDuration::TwoDays,
    },
];

/// Builds the seven-task demonstration board.
///
/// Column titles and status labels come from `config`, so every seeded
/// task's status agrees with its column.
///
/// # Errors
///
/// Returns [`BoardDomainError`] if a seeded record fails validation.
pub fn sample_board(config: &BoardConfig) -> Result<Board, BoardDomainError> {
    let mut board = Board::new(|column| config.column_title(column).to_owned());
    for sample in &SAMPLE_TASKS {
        let assigned_date = NaiveDate::parse_from_str(sample.assigned_date, "%Y-%m-%d")
            .map_err(|_| BoardDomainError::InvalidDate(sample.assigned_date.to_owned()))?;
        let fields = TaskFields {
            street_name: StreetName::new(sample.street_name)?,
            priority_score: PriorityScore::from_tenths(sample.priority_tenths)?,
            team: sample.team.iter().map(|member| (*member).to_owned()).collect(),
            is_high_priority: sample.is_high_priority,
            estimated_duration: sample.estimated_duration,
            description: None,
            location: None,
        };
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::from_number(sample.number),
            fields,
            status: config.status_label(sample.column).unwrap_or_default().to_owned(),
            assigned_date,
        });
        board.push_task(sample.column, task)?;
    }
    Ok(board)
}
