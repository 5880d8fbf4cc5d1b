//! Property tests for board move invariants.

use super::helpers::sorted_ids;
use jalan_board::board::{
    adapters::memory::sample_board,
    config::BoardConfig,
    domain::{Board, ColumnId, TaskId},
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
struct MoveRequest {
    task: u64,
    target: ColumnId,
    index: usize,
}

fn column_strategy() -> impl Strategy<Value = ColumnId> {
    prop_oneof![
        Just(ColumnId::NewPriority),
        Just(ColumnId::SurveyDispatched),
        Just(ColumnId::MaintenanceScheduled),
        Just(ColumnId::Completed),
    ]
}

fn move_strategy() -> impl Strategy<Value = MoveRequest> {
    (1_u64..=7, column_strategy(), 0_usize..10).prop_map(|(task, target, index)| MoveRequest {
        task,
        target,
        index,
    })
}

fn seeded() -> (Board, BoardConfig) {
    let config = BoardConfig::default();
    let board = sample_board(&config).expect("sample board should be valid");
    (board, config)
}

fn apply(board: &mut Board, config: &BoardConfig, request: &MoveRequest) -> bool {
    let task_id = TaskId::from_number(request.task);
    let source = board.locate(task_id).expect("seeded task stays on the board").column;
    board
        .move_task(
            task_id,
            source,
            request.target,
            request.index,
            config.status_label(request.target),
        )
        .is_ok()
}

proptest! {
    #[test]
    fn moves_preserve_the_set_of_tasks(requests in prop::collection::vec(move_strategy(), 1..40)) {
        let (mut board, config) = seeded();
        let expected = sorted_ids(&board);

        for request in &requests {
            let before = board.clone();
            if !apply(&mut board, &config, request) {
                prop_assert_eq!(&board, &before);
            }
            prop_assert_eq!(sorted_ids(&board), expected.clone());
            prop_assert_eq!(board.len(), 7);
        }
    }

    #[test]
    fn status_always_matches_column(requests in prop::collection::vec(move_strategy(), 1..40)) {
        let (mut board, config) = seeded();

        for request in &requests {
            apply(&mut board, &config, request);
        }

        for column in board.columns() {
            let label = config.status_label(column.id()).expect("default labels cover every column");
            for task in column.tasks() {
                prop_assert_eq!(task.status(), label);
            }
        }
    }

    #[test]
    fn moving_back_restores_the_board(request in move_strategy()) {
        let (mut board, config) = seeded();
        let before = board.clone();
        let task_id = TaskId::from_number(request.task);
        let origin = board.locate(task_id).expect("seeded task is on the board");

        if apply(&mut board, &config, &request) {
            let current = board.locate(task_id).expect("moved task is on the board");
            board
                .move_task(
                    task_id,
                    current.column,
                    origin.column,
                    origin.index,
                    config.status_label(origin.column),
                )
                .expect("starting position is always reachable");
        }

        prop_assert_eq!(board, before);
    }
}
