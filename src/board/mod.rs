//! Kanban task board for road-maintenance work.
//!
//! Tasks move through four workflow columns, from newly prioritised damage
//! reports to completed repairs. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Configuration in [`config`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
