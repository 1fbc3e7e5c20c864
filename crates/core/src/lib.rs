//! Core library for Momentum
//!
//! This crate contains the board logic, including:
//! - The three-column task board and its mutations
//! - Snapshot persistence (file-backed or ephemeral)
//! - The session that ties a board to its store

pub mod config;
pub mod error;
pub mod kanban;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
