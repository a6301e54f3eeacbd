//! Test doubles shared by the application tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use spiceroute_core::category::{CategoryCount, CategoryKind};
use spiceroute_core::chat::{ChatReply, ChatRequest};
use spiceroute_core::filter::FilterOptions;
use spiceroute_core::ingredient::{IndexLetter, IngredientCount};
use spiceroute_core::recipe::{Recipe, RecipeDetail, SearchQuery, SearchResult};
use spiceroute_core::{RecipeApi, Result, SessionIdStore, SpiceError};
use tokio::sync::{mpsc, oneshot};

/// A request held open until the test answers it.
pub struct Pending<Req, Resp> {
    pub request: Req,
    respond: oneshot::Sender<Result<Resp>>,
}

impl<Req, Resp> Pending<Req, Resp> {
    pub fn answer(self, result: Result<Resp>) {
        let _ = self.respond.send(result);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(SearchQuery),
    Detail(String),
    Categories(CategoryKind),
    Ingredients(Option<char>),
    Filters,
    Chat(ChatRequest),
}

/// Canned responses, optionally gated.
///
/// With a gate installed, the matching call is forwarded to the test through
/// an mpsc channel and resolves only when the test answers it.
pub struct MockRecipeApi {
    calls: Mutex<Vec<Call>>,
    search: Mutex<Result<SearchResult>>,
    detail: Mutex<Result<RecipeDetail>>,
    categories: Mutex<Result<Vec<CategoryCount>>>,
    ingredients: Mutex<Result<Vec<IngredientCount>>>,
    filters: Mutex<Result<FilterOptions>>,
    chat: Mutex<Result<ChatReply>>,
    search_gate: Option<mpsc::UnboundedSender<Pending<SearchQuery, SearchResult>>>,
    chat_gate: Option<mpsc::UnboundedSender<Pending<ChatRequest, ChatReply>>>,
    filters_gate: Option<mpsc::UnboundedSender<Pending<(), FilterOptions>>>,
}

impl Default for MockRecipeApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            search: Mutex::new(Ok(search_result(3, 3))),
            detail: Mutex::new(Ok(detail("r1"))),
            categories: Mutex::new(Ok(Vec::new())),
            ingredients: Mutex::new(Ok(Vec::new())),
            filters: Mutex::new(Ok(FilterOptions::default())),
            chat: Mutex::new(Ok(ChatReply {
                response: "Hallo!".to_string(),
            })),
            search_gate: None,
            chat_gate: None,
            filters_gate: None,
        }
    }
}

impl MockRecipeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, result: Result<SearchResult>) -> Self {
        *self.search.lock().unwrap() = result;
        self
    }

    pub fn with_detail(self, result: Result<RecipeDetail>) -> Self {
        *self.detail.lock().unwrap() = result;
        self
    }

    pub fn with_categories(self, result: Result<Vec<CategoryCount>>) -> Self {
        *self.categories.lock().unwrap() = result;
        self
    }

    pub fn with_ingredients(self, result: Result<Vec<IngredientCount>>) -> Self {
        *self.ingredients.lock().unwrap() = result;
        self
    }

    pub fn with_filters(self, result: Result<FilterOptions>) -> Self {
        *self.filters.lock().unwrap() = result;
        self
    }

    pub fn with_chat(self, result: Result<ChatReply>) -> Self {
        *self.chat.lock().unwrap() = result;
        self
    }

    pub fn set_search(&self, result: Result<SearchResult>) {
        *self.search.lock().unwrap() = result;
    }

    pub fn gate_search(mut self) -> (Self, mpsc::UnboundedReceiver<Pending<SearchQuery, SearchResult>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.search_gate = Some(tx);
        (self, rx)
    }

    pub fn gate_chat(mut self) -> (Self, mpsc::UnboundedReceiver<Pending<ChatRequest, ChatReply>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.chat_gate = Some(tx);
        (self, rx)
    }

    pub fn gate_filters(mut self) -> (Self, mpsc::UnboundedReceiver<Pending<(), FilterOptions>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.filters_gate = Some(tx);
        (self, rx)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<SearchQuery> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

async fn gated<Req, Resp>(
    gate: &mpsc::UnboundedSender<Pending<Req, Resp>>,
    request: Req,
) -> Result<Resp> {
    let (respond, rx) = oneshot::channel();
    gate.send(Pending { request, respond })
        .map_err(|_| SpiceError::internal("test dropped the gate"))?;
    rx.await
        .map_err(|_| SpiceError::network("request abandoned"))?
}

#[async_trait]
impl RecipeApi for MockRecipeApi {
    async fn search_recipes(&self, query: &SearchQuery) -> Result<SearchResult> {
        self.record(Call::Search(query.clone()));
        if let Some(gate) = &self.search_gate {
            return gated(gate, query.clone()).await;
        }
        self.search.lock().unwrap().clone()
    }

    async fn recipe_detail(&self, id: &str) -> Result<RecipeDetail> {
        self.record(Call::Detail(id.to_string()));
        self.detail.lock().unwrap().clone()
    }

    async fn categories(&self, kind: CategoryKind) -> Result<Vec<CategoryCount>> {
        self.record(Call::Categories(kind));
        self.categories.lock().unwrap().clone()
    }

    async fn ingredients_az(&self, letter: Option<IndexLetter>) -> Result<Vec<IngredientCount>> {
        self.record(Call::Ingredients(letter.map(IndexLetter::as_char)));
        self.ingredients.lock().unwrap().clone()
    }

    async fn filter_options(&self) -> Result<FilterOptions> {
        self.record(Call::Filters);
        if let Some(gate) = &self.filters_gate {
            return gated(gate, ()).await;
        }
        self.filters.lock().unwrap().clone()
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        self.record(Call::Chat(request.clone()));
        if let Some(gate) = &self.chat_gate {
            return gated(gate, request.clone()).await;
        }
        self.chat.lock().unwrap().clone()
    }
}

/// Session-id store whose every operation fails.
pub struct BrokenStore;

#[async_trait]
impl SessionIdStore for BrokenStore {
    async fn load(&self) -> Result<Option<String>> {
        Err(SpiceError::io("disk on fire"))
    }

    async fn save(&self, _session_id: &str) -> Result<()> {
        Err(SpiceError::io("disk on fire"))
    }
}

pub fn recipe(id: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: format!("Recept {}", id),
        image: None,
        description: None,
        recipe_yield: None,
        main_ingredient: None,
        countries: vec!["Thailand".to_string()],
        regions: Vec::new(),
        methods: Vec::new(),
        instructions: None,
    }
}

/// `count` recipes out of `total` matches.
pub fn search_result(count: usize, total: u64) -> SearchResult {
    SearchResult {
        recipes: (0..count).map(|i| recipe(&format!("r{}", i))).collect(),
        total,
    }
}

pub fn detail(id: &str) -> RecipeDetail {
    RecipeDetail {
        recipe: recipe(id),
        ingredients: Vec::new(),
        related: Vec::new(),
    }
}

pub fn api(mock: MockRecipeApi) -> (Arc<MockRecipeApi>, Arc<dyn RecipeApi>) {
    let mock = Arc::new(mock);
    let api: Arc<dyn RecipeApi> = mock.clone();
    (mock, api)
}
