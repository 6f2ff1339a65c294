//! Page request and page result types shared by the paginated listings.

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of domain models together with the totals needed by clients.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Builds a page, deriving `total_pages` from `total` and the page size.
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        let total_pages = if request.per_page > 0 {
            total.div_ceil(request.per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
            total_pages,
        }
    }
}
