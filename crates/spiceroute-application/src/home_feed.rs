//! Featured recipes on the landing screen.

use std::sync::Arc;

use spiceroute_core::recipe::{Recipe, SearchQuery};
use spiceroute_core::{LoadState, RecipeApi};
use tokio::sync::RwLock;

use crate::messages;

/// Number of recipes shown on the landing screen.
pub const FEATURED_LIMIT: u32 = 6;

pub struct HomeFeed {
    api: Arc<dyn RecipeApi>,
    view: RwLock<LoadState<Vec<Recipe>>>,
}

impl HomeFeed {
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self {
            api,
            view: RwLock::new(LoadState::Loading),
        }
    }

    pub async fn load(&self) -> LoadState<Vec<Recipe>> {
        *self.view.write().await = LoadState::Loading;

        let view = match self.api.search_recipes(&SearchQuery::featured(FEATURED_LIMIT)).await {
            Ok(result) => LoadState::Ready(result.recipes),
            Err(e) => {
                tracing::warn!("Loading featured recipes failed: {}", e);
                LoadState::Error(messages::LIST_ERROR.to_string())
            }
        };

        *self.view.write().await = view.clone();
        view
    }

    pub async fn view(&self) -> LoadState<Vec<Recipe>> {
        self.view.read().await.clone()
    }
}
