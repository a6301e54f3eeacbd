//! Parameters of one recipe search request.

use crate::filter::FilterSet;
use crate::pagination::PageState;

/// Filters plus the page window sent to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub filters: FilterSet,
    pub limit: u32,
    pub skip: u32,
}

impl SearchQuery {
    pub fn new(filters: FilterSet, page: PageState) -> Self {
        Self {
            filters,
            limit: page.limit(),
            skip: page.skip(),
        }
    }

    /// Unfiltered first `limit` recipes.
    pub fn featured(limit: u32) -> Self {
        Self {
            filters: FilterSet::reset(),
            limit,
            skip: 0,
        }
    }

    /// Query pairs for the wire: filter values under their plural keys,
    /// followed by `limit` and `skip`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.filters.api_pairs();
        pairs.push(("limit", self.limit.to_string()));
        pairs.push(("skip", self.skip.to_string()));
        pairs
    }
}
