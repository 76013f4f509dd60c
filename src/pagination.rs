//! Pagination Module
//!
//! Offset-based paging with a `has_more` heuristic: a page that comes back
//! exactly full is assumed to have a successor. A total that is an exact
//! multiple of the page size therefore reports one extra, empty page.

use serde::{Deserialize, Serialize};

/// Page size used by listing endpoints unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 50;

// == Page Request ==
/// A 0-based page index and a positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Creates a request. A zero page size falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn new(page: usize, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self { page, page_size }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Number of items to ask the data source for.
    pub fn limit(&self) -> usize {
        self.page_size
    }

    /// Previous page index, clamped at zero.
    pub fn previous_page(&self) -> usize {
        self.page.saturating_sub(1)
    }

    /// Wraps the items fetched for this page.
    pub fn into_result<T>(self, items: Vec<T>) -> PageResult<T> {
        let has_more = has_more(items.len(), self.page_size);
        PageResult {
            items,
            has_more,
            page: self.page,
            next_page: if has_more { self.page.checked_add(1) } else { None },
            previous_page: self.previous_page(),
        }
    }
}

/// Whether more pages are likely to follow a page holding `returned` items.
pub fn has_more(returned: usize, page_size: usize) -> bool {
    returned == page_size
}

// == Page Result ==
/// One fetched page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    pub page: usize,
    /// Present only when `has_more` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
    pub previous_page: usize,
}
