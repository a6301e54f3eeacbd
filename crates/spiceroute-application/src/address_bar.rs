//! The client's current location.
//!
//! Filter state is never stored anywhere else: controllers decode it from
//! the location's query string on every read and write changes back by
//! navigating.

use spiceroute_core::filter::{FilterSet, RECIPES_PATH};
use tokio::sync::RwLock;

/// A path plus query string, e.g. `/recipes?country=Thailand`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: String,
}

impl Location {
    /// Splits an href into path and query. Fragments are dropped and an
    /// empty path becomes the recipe list.
    pub fn parse(href: &str) -> Self {
        let href = href.split('#').next().unwrap_or_default().trim();
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        let path = if path.is_empty() { RECIPES_PATH } else { path };

        Self {
            path: path.to_string(),
            query: query.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    pub fn filters(&self) -> FilterSet {
        FilterSet::decode(&self.query)
    }
}

/// Shared, mutable holder of the current [`Location`].
#[derive(Debug)]
pub struct AddressBar {
    location: RwLock<Location>,
}

impl Default for AddressBar {
    fn default() -> Self {
        Self::new(RECIPES_PATH)
    }
}

impl AddressBar {
    pub fn new(href: &str) -> Self {
        Self {
            location: RwLock::new(Location::parse(href)),
        }
    }

    pub async fn location(&self) -> Location {
        self.location.read().await.clone()
    }

    pub async fn href(&self) -> String {
        self.location.read().await.href()
    }

    /// The filter set encoded in the current query string.
    pub async fn filters(&self) -> FilterSet {
        self.location.read().await.filters()
    }

    /// Replaces the location and returns the new one.
    pub async fn navigate(&self, href: &str) -> Location {
        let next = Location::parse(href);
        tracing::debug!("Navigating to {}", next.href());
        *self.location.write().await = next.clone();
        next
    }
}
