//! End-to-end board flows through the service.

use super::helpers::{BoardHarness, column_numbers, harness};
use eyre::ensure;
use jalan_board::board::{
    domain::{ColumnId, GestureEvent, MoveOutcome, Severity, TaskId},
    services::{GestureOutcome, TaskForm},
};
use rstest::rstest;

#[rstest]
fn new_task_travels_the_workflow(mut harness: BoardHarness) -> eyre::Result<()> {
    let created = harness.service.create_task(
        TaskForm::new("Jl. Pramuka")
            .with_priority_score("8.25")
            .with_team("AB, CD")
            .with_estimated_duration("1 minggu"),
    )?;
    let task_id = created.id();
    ensure!(task_id == TaskId::from_number(8));
    ensure!(created.priority_score().to_string() == "8.3");

    let mut source = ColumnId::NewPriority;
    for target in [
        ColumnId::SurveyDispatched,
        ColumnId::MaintenanceScheduled,
        ColumnId::Completed,
    ] {
        harness.service.move_task(task_id, source, target, 0)?;
        let expected = harness
            .service
            .config()
            .status_label(target)
            .ok_or_else(|| eyre::eyre!("no label for {target}"))?
            .to_owned();
        let task = harness
            .service
            .board()
            .task(task_id)
            .ok_or_else(|| eyre::eyre!("{task_id} missing"))?;
        ensure!(task.status() == expected);
        source = target;
    }

    ensure!(column_numbers(harness.service.board(), ColumnId::Completed) == vec![8, 6, 7]);
    ensure!(harness.service.stats().completed == 3);

    harness.service.request_delete(task_id);
    let removed = harness
        .service
        .confirm_delete()
        .ok_or_else(|| eyre::eyre!("{task_id} should be removed"))?;
    ensure!(removed.column == ColumnId::Completed);
    ensure!(harness.service.board().len() == 7);
    Ok(())
}

#[rstest]
fn edit_then_move_keeps_edited_fields(mut harness: BoardHarness) -> eyre::Result<()> {
    let task_id = TaskId::from_number(2);
    let form = harness
        .service
        .board()
        .task(task_id)
        .map(TaskForm::from_task)
        .ok_or_else(|| eyre::eyre!("{task_id} missing"))?
        .with_description("Retakan memanjang")
        .with_high_priority(true);

    harness.service.update_task(task_id, form)?;
    harness
        .service
        .move_task(task_id, ColumnId::NewPriority, ColumnId::SurveyDispatched, 1)?;

    let task = harness
        .service
        .board()
        .task(task_id)
        .ok_or_else(|| eyre::eyre!("{task_id} missing"))?;
    ensure!(task.street_name().as_str() == "Jl. Kuningan Timur");
    ensure!(task.description() == Some("Retakan memanjang"));
    ensure!(task.is_high_priority());
    ensure!(task.status() == "Sedang Berlangsung");
    ensure!(column_numbers(harness.service.board(), ColumnId::SurveyDispatched) == vec![3, 2, 4]);
    ensure!(harness.service.stats().high_priority == 3);
    Ok(())
}

#[rstest]
fn gesture_sequence_reorders_within_column(mut harness: BoardHarness) -> eyre::Result<()> {
    let task_id = TaskId::from_number(6);
    let events = [
        GestureEvent::DragStart { task_id },
        GestureEvent::DragHover {
            task_id,
            column: ColumnId::Completed,
            index: 2,
        },
        GestureEvent::Drop {
            task_id,
            column: ColumnId::Completed,
            index: 2,
        },
    ];

    let mut last = None;
    for event in events {
        last = Some(harness.service.handle_gesture(event)?);
    }

    ensure!(matches!(
        last,
        Some(GestureOutcome::Dropped(MoveOutcome::Moved { .. }))
    ));
    ensure!(column_numbers(harness.service.board(), ColumnId::Completed) == vec![7, 6]);
    let task = harness
        .service
        .board()
        .task(task_id)
        .ok_or_else(|| eyre::eyre!("{task_id} missing"))?;
    ensure!(task.status() == "Selesai");
    Ok(())
}

#[rstest]
fn failures_are_reported_as_error_notifications(mut harness: BoardHarness) {
    let before = harness.service.snapshot();

    assert!(harness.service.create_task(TaskForm::new("  ")).is_err());
    assert!(
        harness
            .service
            .move_task(TaskId::from_number(99), ColumnId::NewPriority, ColumnId::Completed, 0)
            .is_err()
    );
    assert!(
        harness
            .service
            .handle_gesture(GestureEvent::Drop {
                task_id: TaskId::from_number(1),
                column: ColumnId::Completed,
                index: 0,
            })
            .is_err()
    );

    let entries = harness.log.drain();
    let titles: Vec<&str> = entries.iter().map(|entry| entry.title()).collect();
    assert_eq!(titles, ["Task not created", "Move rejected", "Drop rejected"]);
    assert!(entries
        .iter()
        .all(|entry| entry.severity() == Severity::Error));
    assert_eq!(harness.service.board(), &before);
}

#[rstest]
fn snapshot_serializes_for_rendering(harness: BoardHarness) -> eyre::Result<()> {
    let json = serde_json::to_value(harness.service.snapshot())?;
    let stats = serde_json::to_value(harness.service.stats())?;

    ensure!(json["survey-dispatched"]["tasks"][1]["team"] == serde_json::json!(["IJ", "KL"]));
    ensure!(json["maintenance-scheduled"]["tasks"][0]["status"] == "Dijadwalkan");
    ensure!(json["new-priority"]["tasks"][0]["priorityScore"] == 9.5);
    ensure!(stats == serde_json::json!({"total": 7, "highPriority": 2, "inProgress": 3, "completed": 2}));
    Ok(())
}
