//! Board snapshot persistence
//!
//! A snapshot is the whole board as one JSON document. The file store
//! replaces it atomically on every save; the ephemeral store keeps nothing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::Error;
use crate::Result;

use super::model::Board;

/// Storage interface for board snapshots
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Read the last saved snapshot, `None` if there is none
    async fn load(&self) -> Result<Option<Board>>;

    /// Overwrite the snapshot with `board`
    async fn save(&self, board: &Board) -> Result<()>;

    /// Whether saved snapshots survive a restart
    fn is_durable(&self) -> bool;
}

/// Snapshot stored as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileBoardStore {
    file_path: PathBuf,
}

impl FileBoardStore {
    /// If the file doesn't exist, it will be created on first save.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

#[async_trait]
impl BoardStore for FileBoardStore {
    async fn load(&self) -> Result<Option<Board>> {
        let exists = tokio::fs::try_exists(&self.file_path)
            .await
            .map_err(|e| Error::Storage(format!("Failed to stat board file: {}", e)))?;
        if !exists {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&self.file_path)
            .await
            .map_err(|e| Error::Storage(format!("Failed to read board file: {}", e)))?;
        let board = serde_json::from_str(&content)
            .map_err(|e| Error::Storage(format!("Failed to parse board file: {}", e)))?;

        Ok(Some(board))
    }

    async fn save(&self, board: &Board) -> Result<()> {
        let content = serde_json::to_string_pretty(board)
            .map_err(|e| Error::Storage(format!("Failed to serialize board: {}", e)))?;

        let parent = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Storage(format!("Failed to create directory: {}", e)))?;

        let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4().as_hyphenated()));

        tokio::fs::write(&temp_path, content)
            .await
            .map_err(|e| Error::Storage(format!("Failed to write temp board file: {}", e)))?;

        if let Err(err) = tokio::fs::rename(&temp_path, &self.file_path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(Error::Storage(format!("Failed to replace board file: {}", err)));
        }

        Ok(())
    }

    fn is_durable(&self) -> bool {
        true
    }
}

/// Session-only storage: nothing is read or written
#[derive(Debug, Clone, Copy, Default)]
pub struct EphemeralBoardStore;

#[async_trait]
impl BoardStore for EphemeralBoardStore {
    async fn load(&self) -> Result<Option<Board>> {
        Ok(None)
    }

    async fn save(&self, _board: &Board) -> Result<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kanban::Column;
    use tempfile::tempdir;

    fn sample_board() -> Board {
        Board::from_columns(
            vec!["one".to_string(), "two".to_string()],
            vec!["three".to_string()],
            vec!["four - 10:00 01 JAN 2024".to_string()],
        )
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let store = FileBoardStore::new(dir.path().join("momentum_data.json"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("momentum_data.json");
        let store = FileBoardStore::new(&path);

        store.save(&sample_board()).await.unwrap();

        let reopened = FileBoardStore::new(&path);
        let loaded = reopened.load().await.unwrap().unwrap();
        assert_eq!(loaded, sample_board());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let store = FileBoardStore::new(dir.path().join("momentum_data.json"));

        store.save(&sample_board()).await.unwrap();
        store.save(&Board::new()).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let store = FileBoardStore::new(dir.path().join("momentum_data.json"));

        store.save(&sample_board()).await.unwrap();
        store.save(&sample_board()).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("momentum_data.json")]);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("momentum_data.json");
        let store = FileBoardStore::new(&path);

        store.save(&sample_board()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_load_defaults_missing_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("momentum_data.json");
        tokio::fs::write(&path, r#"{"todo": ["only todo"]}"#)
            .await
            .unwrap();

        let loaded = FileBoardStore::new(&path).load().await.unwrap().unwrap();
        assert_eq!(loaded.column(Column::Todo), ["only todo"]);
        assert!(loaded.column(Column::Doing).is_empty());
        assert!(loaded.column(Column::Done).is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_snapshot_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("momentum_data.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let result = FileBoardStore::new(&path).load().await;
        assert!(matches!(result, Err(Error::Storage(_))));
    }

    #[tokio::test]
    async fn test_load_unreachable_snapshot_fails() {
        let dir = tempdir().unwrap();
        tokio::fs::write(dir.path().join("state"), "not a directory")
            .await
            .unwrap();
        let store = FileBoardStore::new(dir.path().join("state").join("momentum_data.json"));

        let result = store.load().await;
        assert!(matches!(result, Err(Error::Storage(_))));
    }

    #[tokio::test]
    async fn test_save_fails_when_parent_is_a_file() {
        let dir = tempdir().unwrap();
        tokio::fs::write(dir.path().join("state"), "not a directory")
            .await
            .unwrap();
        let store = FileBoardStore::new(dir.path().join("state").join("momentum_data.json"));

        let result = store.save(&sample_board()).await;
        assert!(matches!(result, Err(Error::Storage(_))));
    }

    #[tokio::test]
    async fn test_ephemeral_store_keeps_nothing() {
        let store = EphemeralBoardStore;
        store.save(&sample_board()).await.unwrap();

        assert!(store.load().await.unwrap().is_none());
        assert!(!store.is_durable());
    }
}
