//! Server-side pagination request and result types.

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZES: [u32; 4] = [10, 25, 50, 100];

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Parameters of one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

impl PageQuery {
    /// Creates a query for the first page.
    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            search: String::new(),
        }
    }

    /// Returns the query with a different page.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Returns the query with a different page size, reset to page 1.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self.page = 1;
        self
    }

    /// Returns the query with new search text, reset to page 1.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    /// Builds the query-string pairs; blank search text is omitted.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        params
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// One page of rows plus the server's counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` rows, at least one.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        page_count(self.total, self.limit)
    }
}

/// Number of pages for `total` rows at `limit` per page, at least one.
#[must_use]
pub fn page_count(total: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    u32::try_from(total.div_ceil(limit)).unwrap_or(u32::MAX).max(1)
}

/// Returns the page size following `current` in [`PAGE_SIZES`], wrapping around.
#[must_use]
pub fn next_page_size(current: u32) -> u32 {
    PAGE_SIZES
        .iter()
        .copied()
        .find(|size| *size > current)
        .unwrap_or(PAGE_SIZES[0])
}

/// Returns the page size preceding `current` in [`PAGE_SIZES`], wrapping around.
#[must_use]
pub fn previous_page_size(current: u32) -> u32 {
    PAGE_SIZES
        .iter()
        .rev()
        .copied()
        .find(|size| *size < current)
        .unwrap_or(PAGE_SIZES[PAGE_SIZES.len() - 1])
}
