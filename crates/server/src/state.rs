//! Application state

use std::sync::Arc;

use momentum_core::config::StorageMode;
use momentum_core::kanban::Session;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    session: Session,
    mode: StorageMode,
}

impl AppState {
    /// Open the board session for the given storage mode
    pub async fn open(mode: StorageMode) -> momentum_core::Result<Self> {
        let session = Session::open(mode.open_store()).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner { session, mode }),
        })
    }

    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    pub fn mode(&self) -> &StorageMode {
        &self.inner.mode
    }
}
