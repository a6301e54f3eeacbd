//! `reqwest`-based [`RecipeApi`].
//!
//! One request per call. Non-success statuses are turned into
//! [`SpiceError::Status`] carrying the response body text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use spiceroute_core::category::{CategoryCount, CategoryKind};
use spiceroute_core::chat::{ChatReply, ChatRequest};
use spiceroute_core::filter::FilterOptions;
use spiceroute_core::ingredient::{IndexLetter, IngredientCount};
use spiceroute_core::recipe::{RecipeDetail, SearchQuery, SearchResult};
use spiceroute_core::{RecipeApi, Result, SpiceError};
use spiceroute_infrastructure::ClientConfig;

use crate::error::from_reqwest;

/// Client for the SpiceRoute REST backend.
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpRecipeApi {
    /// `base_url` is the API root, e.g. `http://localhost:8000/api`.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| SpiceError::config(format!("Failed to build HTTP client: {}", e)))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn with_timeout(&self, request: RequestBuilder) -> RequestBuilder {
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.with_timeout(self.client.get(self.endpoint(path)))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder, context: &str) -> Result<T> {
        tracing::debug!("{}", context);

        let response = request.send().await.map_err(|e| from_reqwest(context, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SpiceError::status(
                status.as_u16(),
                format!("{} failed: {}", context, error_text),
            ));
        }

        response.json::<T>().await.map_err(|e| from_reqwest(context, e))
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn search_recipes(&self, query: &SearchQuery) -> Result<SearchResult> {
        let request = self.get("recipes").query(&query.to_query_pairs());
        self.fetch_json(request, "Search recipes").await
    }

    async fn recipe_detail(&self, id: &str) -> Result<RecipeDetail> {
        let path = format!("recipes/{}", urlencoding::encode(id));
        self.fetch_json(self.get(&path), "Fetch recipe detail").await
    }

    async fn categories(&self, kind: CategoryKind) -> Result<Vec<CategoryCount>> {
        let request = self.get("categories").query(&[("type", kind.as_str())]);
        self.fetch_json(request, "Fetch categories").await
    }

    async fn ingredients_az(&self, letter: Option<IndexLetter>) -> Result<Vec<IngredientCount>> {
        let mut request = self.get("ingredients/az");
        if let Some(letter) = letter {
            request = request.query(&[("letter", letter.as_char().to_string())]);
        }
        self.fetch_json(request, "Fetch ingredient index").await
    }

    async fn filter_options(&self) -> Result<FilterOptions> {
        self.fetch_json(self.get("filters"), "Fetch filter options").await
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        let builder = self.with_timeout(self.client.post(self.endpoint("chat")).json(request));
        self.fetch_json(builder, "Send chat message").await
    }
}
