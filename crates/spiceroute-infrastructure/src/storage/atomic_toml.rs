//! Atomic TOML files.
//!
//! Writes go to a temporary sibling file which is fsynced and then renamed
//! over the target, so readers see either the old or the new content.
//! Read-modify-write cycles additionally hold an exclusive lock on a
//! `.lock` sibling. The lock file stays on disk so every writer locks the
//! same inode.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

use spiceroute_core::SpiceError;

/// Errors that can occur during atomic TOML operations.
#[derive(Debug, Error)]
pub enum AtomicTomlError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Lock error on {path}: {message}")]
    Lock { path: PathBuf, message: String },
}

impl From<AtomicTomlError> for SpiceError {
    fn from(err: AtomicTomlError) -> Self {
        match err {
            AtomicTomlError::Io { .. } | AtomicTomlError::Lock { .. } => {
                SpiceError::io(err.to_string())
            }
            AtomicTomlError::Parse { .. } | AtomicTomlError::Serialize(_) => {
                SpiceError::Serialization {
                    format: "TOML".to_string(),
                    message: err.to_string(),
                }
            }
        }
    }
}

/// A typed handle to one TOML file.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// A missing or blank file yields `Ok(None)`.
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| AtomicTomlError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Serializes `data` and atomically replaces the file.
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        self.ensure_parent()?;

        let content = toml::to_string_pretty(data)?;
        let tmp_path = self.temp_path();

        let mut tmp_file = File::create(&tmp_path).map_err(|e| self.io_error(e))?;
        tmp_file
            .write_all(content.as_bytes())
            .and_then(|_| tmp_file.sync_all())
            .map_err(|e| self.io_error(e))?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))
    }

    /// Locked read-modify-write. `default_value` is used when the file does
    /// not exist yet. Nothing is written if `f` fails.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), AtomicTomlError>
    where
        F: FnOnce(&mut T) -> Result<(), AtomicTomlError>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)
    }

    fn ensure_parent(&self) -> Result<(), AtomicTomlError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))
            }
            _ => Ok(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "state".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }

    fn io_error(&self, source: std::io::Error) -> AtomicTomlError {
        AtomicTomlError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Exclusive lock held for the duration of an update. Released on drop.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicTomlError> {
        use fs2::FileExt;

        let lock_path = path.with_extension("lock");
        let io_error = |source| AtomicTomlError::Io {
            path: lock_path.clone(),
            source,
        };

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(io_error)?;

        file.lock_exclusive().map_err(|e| AtomicTomlError::Lock {
            path: lock_path,
            message: e.to_string(),
        })?;

        Ok(Self { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
