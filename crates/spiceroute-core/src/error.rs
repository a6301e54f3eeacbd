//! Error types for the SpiceRoute client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every SpiceRoute crate.
///
/// The `Network`, `Status` and `Decode` variants together form the
/// "network failure" class: anything that went wrong while talking to the
/// recipe backend. Everything else is a local problem.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SpiceError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The backend answered with a non-success status code
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Caller input was rejected before any request was made
    #[error("Invalid input: {0}")]
    Validation(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error of local files
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SpiceError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// True for every failure that came from talking to the backend.
    pub fn is_network_failure(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Status { .. } | Self::Decode(_)
        )
    }

    /// True when the backend reported that the entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SpiceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SpiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SpiceError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SpiceError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SpiceError>`.
pub type Result<T> = std::result::Result<T, SpiceError>;
