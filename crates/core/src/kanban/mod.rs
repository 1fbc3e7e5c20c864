//! Kanban board management
//!
//! This module provides the three-column (Todo, Doing, Done) board, its
//! snapshot persistence and the session that ties the two together.

mod model;
mod session;
mod store;

pub use model::*;
pub use session::{LoadOutcome, Session};
pub use store::{BoardStore, EphemeralBoardStore, FileBoardStore};
