//! Page arithmetic for the recipe list.

use serde::{Deserialize, Serialize};

/// Number of recipes per list page.
pub const PAGE_LIMIT: u32 = 24;

/// `ceil(total / limit)`. Zero when there are no results.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Current page of the list view.
///
/// `page` is 1-based and never below 1. The state is not persisted and is
/// reset to the first page whenever the filters change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page: u32,
    limit: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self::first()
    }
}

impl PageState {
    /// The first page with the standard limit.
    pub fn first() -> Self {
        Self {
            page: 1,
            limit: PAGE_LIMIT,
        }
    }

    /// A page with a custom limit. Both values are raised to at least 1.
    pub fn with_limit(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Offset of the first item on this page.
    pub fn skip(&self) -> u32 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Total page count for `total` items.
    pub fn total_pages(&self, total: u64) -> u32 {
        total_pages(total, self.limit)
    }

    /// Highest reachable page: an empty result still shows page 1 of 1.
    pub fn max_page(&self, total: u64) -> u32 {
        self.total_pages(total).max(1)
    }

    /// The following page, or `None` when already on the last one.
    pub fn next(&self, total: u64) -> Option<Self> {
        if self.page >= self.total_pages(total) {
            return None;
        }
        Some(self.at(self.page + 1))
    }

    /// The preceding page, or `None` when already on the first one.
    ///
    /// If the total shrank below the current page, the result is also kept
    /// within the last page.
    pub fn prev(&self, total: u64) -> Option<Self> {
        if self.page <= 1 {
            return None;
        }
        Some(self.at((self.page - 1).min(self.max_page(total))))
    }

    /// The page `requested`, clamped into `[1, max_page]`.
    pub fn jump_to(&self, requested: i64, total: u64) -> Self {
        let max = i64::from(self.max_page(total));
        let page = requested.clamp(1, max);
        self.at(page as u32)
    }

    fn at(&self, page: u32) -> Self {
        Self::with_limit(page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 24), 0);
        assert_eq!(total_pages(6, 24), 1);
        assert_eq!(total_pages(24, 24), 1);
        assert_eq!(total_pages(25, 24), 2);
        assert_eq!(total_pages(100, 24), 5);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_skip() {
        assert_eq!(PageState::first().skip(), 0);
        assert_eq!(PageState::with_limit(3, 24).skip(), 48);
        assert_eq!(PageState::with_limit(0, 24).page(), 1);
    }

    #[test]
    fn test_single_page_has_no_neighbours() {
        let state = PageState::first();
        assert_eq!(state.total_pages(6), 1);
        assert!(state.next(6).is_none());
        assert!(state.prev(6).is_none());
    }

    #[test]
    fn test_empty_result_shows_one_page() {
        let state = PageState::first();
        assert_eq!(state.total_pages(0), 0);
        assert_eq!(state.max_page(0), 1);
        assert!(state.next(0).is_none());
        assert_eq!(state.jump_to(4, 0).page(), 1);
    }

    #[test]
    fn test_next_and_prev_stop_at_bounds() {
        let mut state = PageState::first();
        let mut visited = vec![state.page()];
        while let Some(next) = state.next(100) {
            state = next;
            visited.push(state.page());
        }
        assert_eq!(visited, vec![1, 2, 3, 4, 5]);

        while let Some(prev) = state.prev(100) {
            state = prev;
        }
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_jump_to_clamps() {
        let state = PageState::first();
        assert_eq!(state.jump_to(10, 100).page(), 5);
        assert_eq!(state.jump_to(0, 100).page(), 1);
        assert_eq!(state.jump_to(-3, 100).page(), 1);
        assert_eq!(state.jump_to(3, 100).page(), 3);
    }

    #[test]
    fn test_prev_after_total_shrank_stays_in_range() {
        let state = PageState::with_limit(5, 24);
        let prev = state.prev(30).unwrap();
        assert_eq!(prev.page(), 2);
    }

    #[test]
    fn test_pages_never_leave_range() {
        for total in [0u64, 1, 23, 24, 25, 100, 1000] {
            let max = PageState::first().max_page(total);
            for start in 1..=max {
                let state = PageState::with_limit(start, PAGE_LIMIT);
                for candidate in [
                    state.next(total),
                    state.prev(total),
                    Some(state.jump_to(i64::from(start) + 7, total)),
                    Some(state.jump_to(-1, total)),
                ]
                .into_iter()
                .flatten()
                {
                    assert!(candidate.page() >= 1);
                    assert!(candidate.page() <= max);
                }
            }
        }
    }
}
