//! Then steps for board gesture BDD scenarios.

use super::world::{BoardWorld, parse_column};
use jalan_board::board::domain::{BoardErrorKind, Notification, Severity, TaskId};
use rstest_bdd_macros::then;

fn last_notification(world: &BoardWorld) -> Result<Notification, eyre::Report> {
    world
        .log
        .last()
        .ok_or_else(|| eyre::eyre!("no notification was sent"))
}

#[then(r#"column "{column}" holds tasks "{tasks}""#)]
fn column_holds_tasks(world: &BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let expected = tasks
        .split(',')
        .map(|number| number.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| eyre::eyre!("invalid task list in scenario: {err}"))?;
    let actual: Vec<u64> = world
        .service
        .board()
        .column(parse_column(&column)?)
        .tasks()
        .iter()
        .map(|task| task.id().number())
        .collect();

    if actual != expected {
        return Err(eyre::eyre!("expected {column} to hold {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"task {task:u64} has status "{status}""#)]
fn task_has_status(world: &BoardWorld, task: u64, status: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::from_number(task);
    let found = world
        .service
        .board()
        .task(task_id)
        .ok_or_else(|| eyre::eyre!("{task_id} is not on the board"))?;

    if found.status() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            found.status()
        ));
    }
    Ok(())
}

#[then("the board is unchanged")]
fn board_is_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let baseline = world
        .baseline
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing baseline board in scenario world"))?;

    if world.service.board() != baseline {
        return Err(eyre::eyre!("board changed during scenario"));
    }
    Ok(())
}

#[then("no drag is active")]
fn no_drag_is_active(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.service.drag_state().is_active() {
        return Err(eyre::eyre!(
            "expected idle drag state, found {:?}",
            world.service.drag_state()
        ));
    }
    Ok(())
}

#[then("the last operation fails with a validation error")]
fn last_operation_fails_with_validation(world: &BoardWorld) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the last operation to fail"))?;

    if err.kind() != BoardErrorKind::Validation {
        return Err(eyre::eyre!("expected a validation error, got {err:?}"));
    }
    Ok(())
}

#[then(r#"the last notification is an info titled "{title}""#)]
fn last_notification_is_info(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    expect_notification(world, Severity::Info, &title)
}

#[then(r#"the last notification is an error titled "{title}""#)]
fn last_notification_is_error(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    expect_notification(world, Severity::Error, &title)
}

fn expect_notification(
    world: &BoardWorld,
    severity: Severity,
    title: &str,
) -> Result<(), eyre::Report> {
    let notification = last_notification(world)?;
    if notification.severity() != severity || notification.title() != title {
        return Err(eyre::eyre!(
            "expected {severity} notification {title:?}, found {} {:?}",
            notification.severity(),
            notification.title()
        ));
    }
    Ok(())
}
