//! Controller of the filterable, paginated recipe list.
//!
//! Filters come from the [`AddressBar`] query string, the page lives here.
//! Every change of either issues exactly one search. Results are applied
//! only if no newer search was issued in the meantime.

use std::sync::Arc;

use spiceroute_core::filter::{FilterDimension, FilterOptions, FilterSet};
use spiceroute_core::pagination::PageState;
use spiceroute_core::recipe::{SearchQuery, SearchResult};
use spiceroute_core::{LoadState, RecipeApi, Result};
use tokio::sync::RwLock;

use crate::address_bar::AddressBar;
use crate::generation::Generation;
use crate::messages;

#[derive(Debug, Default)]
struct ListState {
    page: PageState,
    /// Total of the last committed result.
    total: u64,
    view: LoadState<SearchResult>,
    options: LoadState<FilterOptions>,
    options_in_flight: bool,
}

/// An issued search: its generation token and the exact request sent.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    query: SearchQuery,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

/// Everything the list screen renders.
#[derive(Debug, Clone)]
pub struct ListSnapshot {
    pub href: String,
    pub filters: FilterSet,
    pub page: PageState,
    pub total: u64,
    pub view: LoadState<SearchResult>,
    pub options: LoadState<FilterOptions>,
}

impl ListSnapshot {
    pub fn total_pages(&self) -> u32 {
        self.page.total_pages(self.total)
    }

    /// Page count as shown to the user: never below 1.
    pub fn display_total_pages(&self) -> u32 {
        self.page.max_page(self.total)
    }

    pub fn has_next(&self) -> bool {
        self.page.next(self.total).is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.page.prev(self.total).is_some()
    }
}

pub struct RecipeListController {
    api: Arc<dyn RecipeApi>,
    address: Arc<AddressBar>,
    generation: Generation,
    state: RwLock<ListState>,
}

impl RecipeListController {
    pub fn new(api: Arc<dyn RecipeApi>, address: Arc<AddressBar>) -> Self {
        Self {
            api,
            address,
            generation: Generation::new(),
            state: RwLock::new(ListState::default()),
        }
    }

    pub fn address(&self) -> &Arc<AddressBar> {
        &self.address
    }

    // ============================================================================
    // Fetch lifecycle
    // ============================================================================

    /// Marks the list as loading and issues a new generation for the
    /// current filters and page.
    pub async fn begin_fetch(&self) -> FetchTicket {
        let filters = self.address.filters().await;
        let mut state = self.state.write().await;

        let generation = self.generation.advance();
        let query = SearchQuery::new(filters, state.page);
        state.view = LoadState::Loading;

        tracing::debug!(
            generation,
            page = state.page.page(),
            skip = query.skip,
            "Issuing recipe search"
        );
        FetchTicket { generation, query }
    }

    /// Applies a search result. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub async fn complete(&self, ticket: FetchTicket, result: Result<SearchResult>) -> bool {
        let mut state = self.state.write().await;

        if !self.generation.is_current(ticket.generation) {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.generation.current(),
                "Discarding stale recipe search result"
            );
            return false;
        }

        match result {
            Ok(result) => {
                tracing::debug!(
                    generation = ticket.generation,
                    total = result.total,
                    "Recipe search committed"
                );
                state.total = result.total;
                state.view = LoadState::Ready(result);
            }
            Err(e) => {
                tracing::warn!("Recipe search failed: {}", e);
                state.view = LoadState::Error(messages::LIST_ERROR.to_string());
            }
        }
        true
    }

    async fn fetch(&self) -> bool {
        let ticket = self.begin_fetch().await;
        let result = self.api.search_recipes(ticket.query()).await;
        self.complete(ticket, result).await
    }

    /// Fetches the current filters and page.
    pub async fn load(&self) -> bool {
        self.fetch().await
    }

    /// Re-issues the same request after a failure.
    pub async fn reload(&self) -> bool {
        self.fetch().await
    }

    // ============================================================================
    // Paging
    // ============================================================================

    /// Moves one page forward. No-op on the last page.
    pub async fn next_page(&self) -> bool {
        self.move_page(|page, total| page.next(total)).await
    }

    /// Moves one page back. No-op on the first page.
    pub async fn prev_page(&self) -> bool {
        self.move_page(|page, total| page.prev(total)).await
    }

    /// Jumps to `requested`, clamped into the valid range.
    pub async fn jump_to(&self, requested: i64) -> bool {
        self.move_page(|page, total| Some(page.jump_to(requested, total)))
            .await
    }

    async fn move_page<F>(&self, step: F) -> bool
    where
        F: FnOnce(&PageState, u64) -> Option<PageState>,
    {
        {
            let mut state = self.state.write().await;
            match step(&state.page, state.total) {
                Some(next) if next != state.page => state.page = next,
                _ => return false,
            }
        }
        self.fetch().await;
        true
    }

    // ============================================================================
    // Filters
    // ============================================================================

    /// Toggles `value` in `dimension`, rewrites the URL and starts over on
    /// page 1.
    pub async fn apply_filter_toggle(&self, dimension: FilterDimension, value: &str) -> FilterSet {
        let next = self.address.filters().await.toggle(dimension, value);
        self.show(&next).await;
        next
    }

    /// Drops every value of `dimension`.
    pub async fn clear_dimension(&self, dimension: FilterDimension) -> FilterSet {
        let next = self.address.filters().await.clear(dimension);
        self.show(&next).await;
        next
    }

    /// Navigates to the bare list URL.
    pub async fn reset_filters(&self) {
        self.show(&FilterSet::reset()).await;
    }

    /// Follows an external link into the list (category tile, typed URL).
    pub async fn open(&self, href: &str) {
        self.address.navigate(href).await;
        self.restart().await;
    }

    async fn show(&self, filters: &FilterSet) {
        self.address.navigate(&filters.href()).await;
        self.restart().await;
    }

    async fn restart(&self) {
        {
            let mut state = self.state.write().await;
            state.page = PageState::with_limit(1, state.page.limit());
            // The old total belongs to the previous filters.
            state.total = 0;
        }
        self.fetch().await;
    }

    /// Loads the filter panel's option lists. Runs once, and overlapping
    /// calls share the first request. A failure only affects the panel, never
    /// the list, and a later call retries.
    pub async fn load_filter_options(&self) -> bool {
        {
            let mut state = self.state.write().await;
            if state.options.is_ready() || state.options_in_flight {
                return false;
            }
            state.options_in_flight = true;
            state.options = LoadState::Loading;
        }

        let options = match self.api.filter_options().await {
            Ok(options) => LoadState::Ready(options),
            Err(e) => {
                tracing::warn!("Loading filter options failed: {}", e);
                LoadState::Error(messages::FILTERS_ERROR.to_string())
            }
        };
        let mut state = self.state.write().await;
        state.options = options;
        state.options_in_flight = false;
        true
    }

    pub async fn snapshot(&self) -> ListSnapshot {
        let location = self.address.location().await;
        let state = self.state.read().await;

        ListSnapshot {
            href: location.href(),
            filters: location.filters(),
            page: state.page,
            total: state.total,
            view: state.view.clone(),
            options: state.options.clone(),
        }
    }
}
