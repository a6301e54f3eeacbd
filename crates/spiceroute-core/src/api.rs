//! The backend API seam.

use async_trait::async_trait;

use crate::category::{CategoryCount, CategoryKind};
use crate::chat::{ChatReply, ChatRequest};
use crate::error::Result;
use crate::filter::FilterOptions;
use crate::ingredient::{IndexLetter, IngredientCount};
use crate::recipe::{RecipeDetail, SearchQuery, SearchResult};

/// Everything the client asks of the recipe backend.
///
/// Implementations perform exactly one request per call: no retries and no
/// caching. Failures are reported as network-class [`SpiceError`]s.
///
/// [`SpiceError`]: crate::error::SpiceError
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// `GET /recipes` with filters, `limit` and `skip`.
    async fn search_recipes(&self, query: &SearchQuery) -> Result<SearchResult>;

    /// `GET /recipes/{id}`. The id is opaque and sent percent-encoded.
    async fn recipe_detail(&self, id: &str) -> Result<RecipeDetail>;

    /// `GET /categories?type=...`
    async fn categories(&self, kind: CategoryKind) -> Result<Vec<CategoryCount>>;

    /// `GET /ingredients/az`, optionally restricted to one letter.
    async fn ingredients_az(&self, letter: Option<IndexLetter>) -> Result<Vec<IngredientCount>>;

    /// `GET /filters`
    async fn filter_options(&self) -> Result<FilterOptions>;

    /// `POST /chat`
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply>;
}
