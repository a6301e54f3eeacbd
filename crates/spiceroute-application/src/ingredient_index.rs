//! The A-Z ingredient index with its search box.

use std::sync::Arc;

use spiceroute_core::ingredient::{IndexLetter, IngredientCount};
use spiceroute_core::{LoadState, RecipeApi};
use tokio::sync::RwLock;

use crate::generation::Generation;
use crate::messages;

#[derive(Debug, Default)]
struct IndexState {
    letter: Option<IndexLetter>,
    search: String,
    view: LoadState<Vec<IngredientCount>>,
}

pub struct IngredientIndex {
    api: Arc<dyn RecipeApi>,
    generation: Generation,
    state: RwLock<IndexState>,
}

impl IngredientIndex {
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self {
            api,
            generation: Generation::new(),
            state: RwLock::new(IndexState::default()),
        }
    }

    /// Loads the index for `letter`, or every ingredient for `None`.
    pub async fn select_letter(&self, letter: Option<IndexLetter>) -> LoadState<Vec<IngredientCount>> {
        let generation = {
            let mut state = self.state.write().await;
            state.letter = letter;
            state.view = LoadState::Loading;
            self.generation.advance()
        };

        let view = match self.api.ingredients_az(letter).await {
            Ok(entries) => LoadState::Ready(entries),
            Err(e) => {
                tracing::warn!("Loading ingredient index failed: {}", e);
                LoadState::Error(messages::INGREDIENTS_ERROR.to_string())
            }
        };

        let mut state = self.state.write().await;
        if self.generation.is_current(generation) {
            state.view = view;
        }
        drop(state);
        self.visible().await
    }

    pub async fn reload(&self) -> LoadState<Vec<IngredientCount>> {
        let letter = self.letter().await;
        self.select_letter(letter).await
    }

    /// Narrows the loaded entries client-side. No request is made.
    pub async fn set_search(&self, search: &str) -> LoadState<Vec<IngredientCount>> {
        self.state.write().await.search = search.trim().to_string();
        self.visible().await
    }

    pub async fn letter(&self) -> Option<IndexLetter> {
        self.state.read().await.letter
    }

    /// Loaded entries matching the search box.
    pub async fn visible(&self) -> LoadState<Vec<IngredientCount>> {
        let state = self.state.read().await;
        let search = state.search.clone();
        state.view.clone().map(|entries| {
            entries
                .into_iter()
                .filter(|entry| entry.matches(&search))
                .collect()
        })
    }
}
