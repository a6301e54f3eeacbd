//! Path resolution for SpiceRoute client files.
//!
//! ```text
//! ~/.config/spiceroute/        # Config directory (dirs::config_dir)
//! ├── config.toml              # User configuration
//! └── state.toml               # Client state (chat session id)
//! ```
//!
//! Every path can be rebased onto an explicit directory, which is what the
//! CLI's `--config-dir` flag and the tests use.

use std::path::PathBuf;

use spiceroute_core::SpiceError;

const APP_DIR_NAME: &str = "spiceroute";
const CONFIG_FILE_NAME: &str = "config.toml";
const STATE_FILE_NAME: &str = "state.toml";

/// Errors that can occur during path resolution.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// No platform config directory could be determined.
    #[error("Cannot find a configuration directory for this platform")]
    ConfigDirNotFound,
}

impl From<PathError> for SpiceError {
    fn from(err: PathError) -> Self {
        SpiceError::config(err.to_string())
    }
}

/// Resolves the files the client reads and writes.
#[derive(Debug, Clone, Default)]
pub struct SpicePaths {
    base: Option<PathBuf>,
}

impl SpicePaths {
    /// `base` replaces the platform config directory when set.
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn state_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(STATE_FILE_NAME))
    }
}
