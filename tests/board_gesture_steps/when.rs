//! When steps for board gesture BDD scenarios.

use super::world::{BoardWorld, parse_column};
use jalan_board::board::{
    domain::{GestureEvent, TaskId},
    services::TaskForm,
};
use rstest_bdd_macros::when;

#[when("task {task:u64} is dragged from its column")]
fn task_is_dragged(world: &mut BoardWorld, task: u64) {
    let result = world.service.handle_gesture(GestureEvent::DragStart {
        task_id: TaskId::from_number(task),
    });
    world.record(result);
}

#[when(r#"task {task:u64} hovers over "{column}" at position {index:usize}"#)]
fn task_hovers(
    world: &mut BoardWorld,
    task: u64,
    column: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let result = world.service.handle_gesture(GestureEvent::DragHover {
        task_id: TaskId::from_number(task),
        column: parse_column(&column)?,
        index,
    });
    world.record(result);
    Ok(())
}

#[when(r#"task {task:u64} is dropped on "{column}" at position {index:usize}"#)]
fn task_is_dropped(
    world: &mut BoardWorld,
    task: u64,
    column: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let result = world.service.handle_gesture(GestureEvent::Drop {
        task_id: TaskId::from_number(task),
        column: parse_column(&column)?,
        index,
    });
    world.record(result);
    Ok(())
}

#[when("the drag is cancelled")]
fn drag_is_cancelled(world: &mut BoardWorld) {
    let result = world.service.handle_gesture(GestureEvent::Cancel);
    world.record(result);
}

#[when(r#"a task is created with street name "{street}""#)]
fn task_created_with_street(world: &mut BoardWorld, street: String) {
    let result = world.service.create_task(TaskForm::new(street));
    world.record(result);
}

#[when("a task is created without a street name")]
fn task_created_without_street(world: &mut BoardWorld) {
    let result = world.service.create_task(TaskForm::default());
    world.record(result);
}

#[when("deletion of task {task:u64} is requested")]
fn deletion_requested(world: &mut BoardWorld, task: u64) {
    world.service.request_delete(TaskId::from_number(task));
}

#[when("the deletion is confirmed")]
fn deletion_confirmed(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .service
        .confirm_delete()
        .ok_or_else(|| eyre::eyre!("pending task was not removed"))?;
    Ok(())
}
