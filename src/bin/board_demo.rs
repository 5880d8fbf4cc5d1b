//! Replays a drag-and-drop session against the sample road-maintenance board.
//!
//! Usage:
//!
//! ```text
//! board_demo [config-path]
//! ```
//!
//! When `config-path` is given it must point at a TOML board configuration,
//! for example:
//!
//! ```toml
//! intake_column = "new-priority"
//! autosave_delay_ms = 250
//!
//! [status_labels]
//! new-priority = "Baru"
//! survey-dispatched = "Sedang Berlangsung"
//! maintenance-scheduled = "Dijadwalkan"
//! completed = "Selesai"
//! ```
//!
//! Notifications are logged through `tracing`; set `RUST_LOG` to adjust the
//! filter. The final board and its statistics are written to stdout as JSON.

use std::env;
use std::io::{self, Write};
use std::sync::Arc;

use jalan_board::board::{
    adapters::{TracingNotificationSink, memory::sample_board},
    config::{BoardConfig, BoardConfigError},
    domain::{BoardDomainError, ColumnId, GestureEvent, TaskId},
    services::{TaskBoardService, TaskForm},
};
use mockable::DefaultClock;
use serde_json::json;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can stop the demo.
#[derive(Debug, Error)]
enum DemoError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to load board config: {0}")]
    Config(#[from] BoardConfigError),
    #[error("failed to seed sample board: {0}")]
    Seed(#[from] BoardDomainError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("failed to write board snapshot: {0}")]
    Output(#[source] BoxError),
}

fn main() -> Result<(), BoxError> {
    install_tracing();
    run(env::args().skip(1)).map_err(Into::into)
}

fn install_tracing() {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let installed = tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
    if installed.is_err() {
        warn!("tracing subscriber already installed");
    }
}

/// Builds the log filter from `RUST_LOG` directives, defaulting to INFO when
/// they are absent or malformed.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn run(mut args: impl Iterator<Item = String>) -> Result<(), DemoError> {
    let config = match args.next() {
        Some(path) => BoardConfig::from_path(path)?,
        None => BoardConfig::default(),
    };
    if let Some(extra) = args.next() {
        return Err(DemoError::InvalidArgs(format!(
            "unexpected argument '{extra}'; expected at most a config path"
        )));
    }

    let board = sample_board(&config)?;
    let mut service = TaskBoardService::with_board(
        board,
        config,
        Arc::new(TracingNotificationSink),
        Arc::new(DefaultClock),
    );
    replay_session(&mut service);

    let runtime = Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(DemoError::RuntimeInit)?;
    runtime.block_on(service.wait_for_autosave());
    info!("autosave indicator cleared");

    let snapshot = json!({
        "board": service.snapshot(),
        "stats": service.stats(),
    });
    let rendered =
        serde_json::to_string_pretty(&snapshot).map_err(|err| DemoError::Output(err.into()))?;
    writeln!(io::stdout(), "{rendered}").map_err(|err| DemoError::Output(err.into()))
}

/// Drives the service through a representative editing session.
///
/// Rejected operations are already reported by the notification sink, so
/// their errors are only counted here.
fn replay_session(service: &mut TaskBoardService<DefaultClock>) {
    let dragged = TaskId::from_number(2);
    let gestures = [
        GestureEvent::DragStart { task_id: dragged },
        GestureEvent::DragHover {
            task_id: dragged,
            column: ColumnId::SurveyDispatched,
            index: 0,
        },
        GestureEvent::Drop {
            task_id: dragged,
            column: ColumnId::SurveyDispatched,
            index: 0,
        },
        GestureEvent::Drop {
            task_id: dragged,
            column: ColumnId::Completed,
            index: 0,
        },
    ];
    let mut rejected = gestures
        .into_iter()
        .filter(|event| service.handle_gesture(*event).is_err())
        .count();

    let created = service.create_task(
        TaskForm::new("Jl. Medan Merdeka Barat")
            .with_priority_score("9.1")
            .with_team("JD, AB")
            .with_high_priority(true)
            .with_estimated_duration("1 minggu")
            .with_location("Jakarta Pusat"),
    );
    match created {
        Ok(task) => {
            service.request_delete(task.id());
            service.cancel_delete();
        }
        Err(_) => rejected += 1,
    }
    if service.create_task(TaskForm::new("   ")).is_err() {
        rejected += 1;
    }

    service.request_delete(TaskId::from_number(7));
    service.confirm_delete();

    info!(rejected, "session replayed");
}
