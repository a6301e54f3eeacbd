//! Category tiles per kind.

use std::sync::Arc;

use spiceroute_core::category::{CategoryCount, CategoryKind};
use spiceroute_core::{LoadState, RecipeApi};
use tokio::sync::RwLock;

use crate::generation::Generation;
use crate::messages;

#[derive(Debug)]
struct BrowserState {
    kind: CategoryKind,
    view: LoadState<Vec<CategoryCount>>,
}

pub struct CategoryBrowser {
    api: Arc<dyn RecipeApi>,
    generation: Generation,
    state: RwLock<BrowserState>,
}

impl CategoryBrowser {
    /// Starts on the country tab.
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self {
            api,
            generation: Generation::new(),
            state: RwLock::new(BrowserState {
                kind: CategoryKind::Country,
                view: LoadState::Loading,
            }),
        }
    }

    /// Switches to `kind` and loads its tiles.
    pub async fn select(&self, kind: CategoryKind) -> LoadState<Vec<CategoryCount>> {
        let generation = {
            let mut state = self.state.write().await;
            state.kind = kind;
            state.view = LoadState::Loading;
            self.generation.advance()
        };

        let view = match self.api.categories(kind).await {
            Ok(tiles) => LoadState::Ready(tiles),
            Err(e) => {
                tracing::warn!("Loading {} categories failed: {}", kind, e);
                LoadState::Error(messages::CATEGORIES_ERROR.to_string())
            }
        };

        let mut state = self.state.write().await;
        if self.generation.is_current(generation) {
            state.view = view;
        }
        state.view.clone()
    }

    pub async fn reload(&self) -> LoadState<Vec<CategoryCount>> {
        let kind = self.kind().await;
        self.select(kind).await
    }

    pub async fn kind(&self) -> CategoryKind {
        self.state.read().await.kind
    }

    pub async fn view(&self) -> LoadState<Vec<CategoryCount>> {
        self.state.read().await.view.clone()
    }

    /// The recipe list URL a tile of the current kind links to.
    pub async fn tile_href(&self, tile: &CategoryCount) -> String {
        self.kind().await.recipes_href(&tile.name)
    }
}
