//! Loader for the recipe detail screen.

use std::sync::Arc;

use spiceroute_core::recipe::{RecipeDetail, normalize_recipe_id, recipe_id_from_segments};
use spiceroute_core::{LoadState, RecipeApi};
use tokio::sync::RwLock;

use crate::generation::Generation;
use crate::messages;

#[derive(Debug, Default)]
struct DetailState {
    recipe_id: Option<String>,
    view: LoadState<RecipeDetail>,
}

/// Fetches one recipe by its (possibly URL-shaped) identifier.
///
/// Opening another recipe while one is still loading supersedes the earlier
/// request.
pub struct RecipeDetailLoader {
    api: Arc<dyn RecipeApi>,
    generation: Generation,
    state: RwLock<DetailState>,
}

impl RecipeDetailLoader {
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self {
            api,
            generation: Generation::new(),
            state: RwLock::new(DetailState::default()),
        }
    }

    /// Opens the recipe addressed by the segments of a detail route.
    pub async fn open_segments<S: AsRef<str>>(&self, segments: &[S]) -> LoadState<RecipeDetail> {
        let id = recipe_id_from_segments(segments);
        self.open(&id).await
    }

    /// Opens the recipe `id`.
    pub async fn open(&self, id: &str) -> LoadState<RecipeDetail> {
        let id = normalize_recipe_id(id);
        let generation = {
            let mut state = self.state.write().await;
            state.recipe_id = Some(id.clone());
            state.view = LoadState::Loading;
            self.generation.advance()
        };

        let view = if id.trim().is_empty() {
            tracing::warn!("Recipe detail requested without an id");
            LoadState::Error(messages::DETAIL_ERROR.to_string())
        } else {
            match self.api.recipe_detail(&id).await {
                Ok(detail) => LoadState::Ready(detail),
                Err(e) => {
                    tracing::warn!("Loading recipe {} failed: {}", id, e);
                    LoadState::Error(messages::DETAIL_ERROR.to_string())
                }
            }
        };

        let mut state = self.state.write().await;
        if self.generation.is_current(generation) {
            state.view = view;
        } else {
            tracing::debug!("Discarding stale detail for {}", id);
        }
        state.view.clone()
    }

    /// Re-issues the request for the current recipe. `None` if nothing was
    /// opened yet.
    pub async fn reload(&self) -> Option<LoadState<RecipeDetail>> {
        let id = self.state.read().await.recipe_id.clone()?;
        Some(self.open(&id).await)
    }

    pub async fn recipe_id(&self) -> Option<String> {
        self.state.read().await.recipe_id.clone()
    }

    pub async fn view(&self) -> LoadState<RecipeDetail> {
        self.state.read().await.view.clone()
    }
}
