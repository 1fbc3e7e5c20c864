//! Error types for the core library

use thiserror::Error;

use crate::kanban::Column;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Illegal transition: {from} -> {to}")]
    IllegalTransition { from: Column, to: Column },

    #[error("Storage error: {0}")]
    Storage(String),
}
