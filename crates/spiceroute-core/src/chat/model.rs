//! Chat transcript and wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single entry of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates an entry with a fixed id (used for seeded entries).
    pub fn with_id(id: impl Into<String>, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), Sender::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), Sender::Assistant, text)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// The client's chat state: session identifier plus the visible transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub session_id: String,
    pub transcript: Vec<ChatMessage>,
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Generates a fresh opaque session identifier (random 128-bit UUID).
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}
