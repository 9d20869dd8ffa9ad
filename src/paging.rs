//! Pagination primitives shared by the todo and job query surfaces.
//!
//! Both read paths expose the same page shape: a slice of items plus
//! `currentPage`, `totalPages`, and `totalItems`. The item count and the page
//! contents are always computed from the same query value, so the totals
//! cannot drift from the returned slice beyond the store's own read
//! consistency.

use serde::Serialize;

/// A validated, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Page size applied when the caller supplies zero.
    pub const DEFAULT_LIMIT: u64 = 10;

    /// Creates a page request, normalising out-of-range input.
    ///
    /// A zero `page` becomes page 1; a zero `limit` becomes
    /// [`Self::DEFAULT_LIMIT`].
    #[must_use]
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: if limit == 0 { Self::DEFAULT_LIMIT } else { limit },
        }
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(self) -> u64 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn limit(self) -> u64 {
        self.limit
    }

    /// Returns the number of records to skip: `(page - 1) * limit`.
    #[must_use]
    pub const fn offset(self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}

/// One page of results together with pagination totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in query order.
    pub items: Vec<T>,
    /// The 1-based page number that was requested.
    pub current_page: u64,
    /// Total number of pages for the matched record count.
    pub total_pages: u64,
    /// Total number of records matching the query, across all pages.
    pub total_items: u64,
}

impl<T> Page<T> {
    /// Assembles a page from fetched items and the matching record count.
    ///
    /// `total_pages` is `ceil(total_items / limit)`. A request past the last
    /// page yields an empty item list with `total_items` unchanged.
    #[must_use]
    pub fn assemble(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            current_page: request.page(),
            total_pages: total_items.div_ceil(request.limit()),
            total_items,
        }
    }
}
