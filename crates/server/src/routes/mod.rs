//! Route handlers

pub mod board;
pub mod health;
