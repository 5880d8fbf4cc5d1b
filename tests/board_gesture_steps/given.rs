//! Given steps for board gesture BDD scenarios.

use std::sync::Arc;

use super::world::BoardWorld;
use eyre::WrapErr;
use jalan_board::board::{
    adapters::memory::sample_board, config::BoardConfig, services::TaskBoardService,
};
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given("the sample road-maintenance board")]
fn sample_road_maintenance_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let config = BoardConfig::default();
    let board = sample_board(&config).wrap_err("seed sample board for scenario")?;
    world.baseline = Some(board.clone());
    world.service = TaskBoardService::with_board(
        board,
        config,
        Arc::new(world.log.clone()),
        Arc::new(DefaultClock),
    );
    Ok(())
}
