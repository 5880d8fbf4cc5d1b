//! Step definitions for board gesture scenarios.

mod given;
mod then;
mod when;
pub mod world;
