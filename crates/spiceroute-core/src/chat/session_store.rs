//! Persistence seam for the chat session identifier.

use async_trait::async_trait;

use crate::error::Result;

/// Stores the one chat session identifier of this client.
///
/// The identifier lives under a fixed key and survives restarts. It is only
/// replaced when the user explicitly resets the chat.
#[async_trait]
pub trait SessionIdStore: Send + Sync {
    /// Returns the stored identifier, if any.
    async fn load(&self) -> Result<Option<String>>;

    /// Replaces the stored identifier.
    async fn save(&self, session_id: &str) -> Result<()>;
}
