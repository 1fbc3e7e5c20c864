//! Board session
//!
//! Owns the one in-memory board of a running process together with the
//! store it is mirrored to. Every mutation is followed by a full save,
//! performed under the write lock so snapshots land in mutation order.

use chrono::Local;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::Result;

use super::model::{Board, Column, Direction};
use super::store::BoardStore;

/// How the board was hydrated when the session opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Fresh,
    Ephemeral,
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { count } => write!(f, "Loaded {} tasks!", count),
            Self::Fresh => f.write_str("New session—add your first task!"),
            Self::Ephemeral => f.write_str("Ephemeral session: tasks are not saved to disk."),
        }
    }
}

impl LoadOutcome {
    /// Banner for a view of `board`.
    ///
    /// Durable sessions report the current task count once anything has been
    /// loaded or added, since every view follows a save.
    pub fn notice(&self, board: &Board) -> String {
        match self {
            Self::Fresh if board.is_empty() => Self::Fresh.to_string(),
            Self::Loaded { .. } | Self::Fresh => Self::Loaded {
                count: board.total(),
            }
            .to_string(),
            Self::Ephemeral => Self::Ephemeral.to_string(),
        }
    }
}

pub struct Session {
    board: RwLock<Board>,
    store: Arc<dyn BoardStore>,
    outcome: LoadOutcome,
}

impl Session {
    /// Open a session, hydrating the board from `store` when it holds a snapshot.
    ///
    /// A snapshot that cannot be read or parsed fails the whole open.
    pub async fn open(store: Arc<dyn BoardStore>) -> Result<Self> {
        let (board, outcome) = if !store.is_durable() {
            (Board::new(), LoadOutcome::Ephemeral)
        } else {
            match store.load().await? {
                Some(board) => {
                    let count = board.total();
                    (board, LoadOutcome::Loaded { count })
                }
                None => (Board::new(), LoadOutcome::Fresh),
            }
        };
        info!("{}", outcome);

        Ok(Self {
            board: RwLock::new(board),
            store,
            outcome,
        })
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.outcome
    }

    pub fn is_durable(&self) -> bool {
        self.store.is_durable()
    }

    /// Current board without saving
    pub async fn board(&self) -> Board {
        self.board.read().await.clone()
    }

    /// Save and return the current board; called once per view refresh
    pub async fn render(&self) -> Result<Board> {
        let board = self.board.write().await;
        self.store.save(&board).await?;
        Ok(board.clone())
    }

    pub async fn add(&self, text: &str) -> Result<Board> {
        let mut board = self.board.write().await;
        if board.add(text) {
            info!("Added task to todo");
        } else {
            debug!("Ignored empty task");
        }
        self.store.save(&board).await?;
        Ok(board.clone())
    }

    pub async fn move_task(&self, source: Column, index: usize, target: Column) -> Result<Board> {
        let mut board = self.board.write().await;
        let now = Local::now().naive_local();
        if board.move_task(source, index, target, now)? {
            info!("Moved task {} from {} to {}", index, source, target);
        } else {
            debug!("Ignored move of {} index {}: out of range", source, index);
        }
        self.store.save(&board).await?;
        Ok(board.clone())
    }

    pub async fn swap(&self, column: Column, index: usize, direction: Direction) -> Result<Board> {
        let mut board = self.board.write().await;
        if board.swap(column, index, direction) {
            debug!("Swapped {} index {} {:?}", column, index, direction);
        } else {
            debug!("Ignored swap of {} index {} {:?}", column, index, direction);
        }
        self.store.save(&board).await?;
        Ok(board.clone())
    }

    pub async fn delete(&self, column: Column, index: usize) -> Result<Board> {
        let mut board = self.board.write().await;
        if board.delete(column, index).is_some() {
            info!("Deleted task {} from {}", index, column);
        } else {
            debug!("Ignored delete of {} index {}: out of range", column, index);
        }
        self.store.save(&board).await?;
        Ok(board.clone())
    }
}
