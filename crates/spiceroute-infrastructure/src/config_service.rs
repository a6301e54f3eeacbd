//! Client configuration loading.
//!
//! Sources are layered, later ones winning: built-in defaults, then the
//! `[api]` table of `config.toml`, then `SPICEROUTE_API_URL` and
//! `SPICEROUTE_TIMEOUT_SECS`. Command-line overrides are applied by the
//! caller through [`ClientConfig::with_api_base_url`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use spiceroute_core::{Result, SpiceError};

use crate::paths::SpicePaths;
use crate::storage::AtomicTomlFile;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_URL: &str = "SPICEROUTE_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "SPICEROUTE_TIMEOUT_SECS";

/// Resolved settings for talking to the recipe backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000/api`.
    pub api_base_url: String,
    /// Per-request timeout in seconds. `0` disables it.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Replaces the base URL after validating it.
    pub fn with_api_base_url(mut self, url: &str) -> Result<Self> {
        self.api_base_url = normalize_base_url(url)?;
        Ok(self)
    }

    fn apply_file(mut self, file: ConfigFile) -> Result<Self> {
        if let Some(url) = file.api.base_url {
            self = self.with_api_base_url(&url)?;
        }
        if let Some(secs) = file.api.timeout_secs {
            self.request_timeout_secs = secs;
        }
        Ok(self)
    }

    /// Applies environment overrides looked up through `lookup`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self = self.with_api_base_url(&url)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            self.request_timeout_secs = raw.trim().parse().map_err(|_| {
                SpiceError::config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
        }
        Ok(self)
    }
}

/// On-disk shape of `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api: ApiSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Loads [`ClientConfig`] from the layered sources.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: SpicePaths,
}

impl ConfigService {
    pub fn new(paths: SpicePaths) -> Self {
        Self { paths }
    }

    /// Defaults, then `config.toml`, then the process environment.
    pub fn load(&self) -> Result<ClientConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(&self, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = self.paths.config_file()?;
        let file = AtomicTomlFile::<ConfigFile>::new(path.clone()).load()?;

        let mut config = ClientConfig::default();
        if let Some(file) = file {
            tracing::debug!("Loaded configuration from {}", path.display());
            config = config.apply_file(file)?;
        }
        config.apply_env(lookup)
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| SpiceError::config(format!("Invalid API URL '{}': {}", raw, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SpiceError::config(format!(
            "API URL must use http or https, got '{}'",
            raw
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn service_with_file(content: Option<&str>) -> (TempDir, ConfigService) {
        let temp_dir = TempDir::new().unwrap();
        if let Some(content) = content {
            std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();
        }
        let service = ConfigService::new(SpicePaths::new(Some(temp_dir.path().to_path_buf())));
        (temp_dir, service)
    }

    #[test]
    fn test_defaults_without_file() {
        let (_dir, service) = service_with_file(None);
        let config = service.load_with_env(no_env).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let (_dir, service) = service_with_file(Some(
            "[api]\nbase_url = \"https://recepten.example.org/api/\"\ntimeout_secs = 5\n",
        ));
        let config = service.load_with_env(no_env).unwrap();
        assert_eq!(config.api_base_url, "https://recepten.example.org/api");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_env_overrides_file() {
        let (_dir, service) = service_with_file(Some("[api]\ntimeout_secs = 5\n"));
        let env: HashMap<&str, &str> = [
            (ENV_API_URL, "http://127.0.0.1:9000/api"),
            (ENV_TIMEOUT_SECS, "0"),
        ]
        .into_iter()
        .collect();

        let config = service
            .load_with_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_invalid_env_timeout() {
        let err = ClientConfig::default()
            .apply_env(|key| (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ClientConfig::default().with_api_base_url("not a url").is_err());
        assert!(
            ClientConfig::default()
                .with_api_base_url("ftp://example.com")
                .unwrap_err()
                .is_config()
        );
    }

    #[test]
    fn test_broken_file_is_reported() {
        let (_dir, service) = service_with_file(Some("[api\n"));
        let err = service.load_with_env(no_env).unwrap_err();
        assert!(matches!(err, SpiceError::Serialization { .. }));
    }
}
