//! Persisted client state and the session-id stores built on it.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use spiceroute_core::{Result, SessionIdStore, SpiceError};

use crate::paths::SpicePaths;
use crate::storage::AtomicTomlFile;

/// Contents of `state.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    /// Chat session identifier, reused across restarts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_session_id: Option<String>,
}

/// [`SessionIdStore`] backed by `state.toml`.
///
/// File access runs on the blocking pool so callers on the async runtime
/// are never stalled by disk I/O.
#[derive(Clone)]
pub struct TomlSessionIdStore {
    file: Arc<AtomicTomlFile<ClientState>>,
}

impl TomlSessionIdStore {
    pub fn new(paths: &SpicePaths) -> Result<Self> {
        Ok(Self::with_path(paths.state_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
        }
    }

    async fn run_blocking<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&AtomicTomlFile<ClientState>) -> Result<T> + Send + 'static,
    {
        let file = Arc::clone(&self.file);
        tokio::task::spawn_blocking(move || f(&file))
            .await
            .map_err(|e| SpiceError::internal(format!("State file task failed: {}", e)))?
    }
}

#[async_trait]
impl SessionIdStore for TomlSessionIdStore {
    async fn load(&self) -> Result<Option<String>> {
        let state = self.run_blocking(|file| Ok(file.load()?)).await?;
        Ok(state.and_then(|s| s.chat_session_id))
    }

    async fn save(&self, session_id: &str) -> Result<()> {
        let session_id = session_id.to_string();
        self.run_blocking(move |file| {
            file.update(ClientState::default(), |state| {
                state.chat_session_id = Some(session_id);
                Ok(())
            })?;
            Ok(())
        })
        .await?;
        tracing::debug!("Persisted chat session id");
        Ok(())
    }
}

/// In-memory [`SessionIdStore`] for ephemeral runs and tests.
#[derive(Debug, Default)]
pub struct MemorySessionIdStore {
    session_id: Mutex<Option<String>>,
}

impl MemorySessionIdStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session_id(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Mutex::new(Some(session_id.into())),
        }
    }
}

#[async_trait]
impl SessionIdStore for MemorySessionIdStore {
    async fn load(&self) -> Result<Option<String>> {
        let guard = self
            .session_id
            .lock()
            .map_err(|_| SpiceError::internal("Session id store lock poisoned"))?;
        Ok(guard.clone())
    }

    async fn save(&self, session_id: &str) -> Result<()> {
        let mut guard = self
            .session_id
            .lock()
            .map_err(|_| SpiceError::internal("Session id store lock poisoned"))?;
        *guard = Some(session_id.to_string());
        Ok(())
    }
}
