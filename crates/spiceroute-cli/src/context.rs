//! Wiring of configuration, HTTP client and session store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use spiceroute_core::{RecipeApi, SessionIdStore};
use spiceroute_infrastructure::{
    ConfigService, MemorySessionIdStore, SpicePaths, TomlSessionIdStore,
};
use spiceroute_interaction::HttpRecipeApi;

pub struct AppContext {
    pub api: Arc<dyn RecipeApi>,
    paths: SpicePaths,
    ephemeral: bool,
}

impl AppContext {
    /// Resolves configuration (file, environment, then `api_url`) and builds
    /// the HTTP client.
    pub fn build(api_url: Option<&str>, config_dir: Option<PathBuf>, ephemeral: bool) -> Result<Self> {
        let paths = SpicePaths::new(config_dir);
        let mut config = ConfigService::new(paths.clone()).load()?;
        if let Some(url) = api_url {
            config = config.with_api_base_url(url)?;
        }

        tracing::debug!(
            api = %config.api_base_url,
            timeout_secs = config.request_timeout_secs,
            "Using recipe API"
        );
        let api: Arc<dyn RecipeApi> = Arc::new(HttpRecipeApi::from_config(&config)?);

        Ok(Self {
            api,
            paths,
            ephemeral,
        })
    }

    pub fn session_store(&self) -> Result<Arc<dyn SessionIdStore>> {
        if self.ephemeral {
            return Ok(Arc::new(MemorySessionIdStore::new()));
        }
        Ok(Arc::new(TomlSessionIdStore::new(&self.paths)?))
    }
}
