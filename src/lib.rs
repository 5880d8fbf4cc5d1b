//! Jalan board: task board core for road-maintenance reporting.
//!
//! This crate provides the state core behind a municipal road-maintenance
//! dashboard's kanban board: ordered workflow columns, drag-and-drop moves
//! between them, and creation, editing and deletion of maintenance tasks.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Task board domain, configuration and state manager

pub mod board;
