//! Storage configuration read from the environment

use std::path::PathBuf;
use std::sync::Arc;

use crate::kanban::{BoardStore, EphemeralBoardStore, FileBoardStore};

pub const EPHEMERAL_ENV: &str = "MOMENTUM_EPHEMERAL";
pub const DATA_FILE_ENV: &str = "MOMENTUM_DATA_FILE";
pub const DEFAULT_DATA_FILE: &str = "momentum_data.json";

/// Where the board snapshot lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageMode {
    /// Snapshot file, relative paths resolved against the working directory
    Durable(PathBuf),
    /// Session-only, nothing touches disk
    Ephemeral,
}

impl StorageMode {
    pub fn from_env() -> Self {
        Self::resolve(
            env_flag(EPHEMERAL_ENV, false),
            std::env::var(DATA_FILE_ENV).ok(),
        )
    }

    fn resolve(ephemeral: bool, data_file: Option<String>) -> Self {
        if ephemeral {
            return Self::Ephemeral;
        }
        let path = data_file
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        Self::Durable(PathBuf::from(path))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Durable(_) => "durable",
            Self::Ephemeral => "ephemeral",
        }
    }

    /// Build the store backing this mode
    pub fn open_store(&self) -> Arc<dyn BoardStore> {
        match self {
            Self::Durable(path) => Arc::new(FileBoardStore::new(path.clone())),
            Self::Ephemeral => Arc::new(EphemeralBoardStore),
        }
    }
}

pub fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => parse_flag(&raw).unwrap_or(default),
        Err(_) => default,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
