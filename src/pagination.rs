//! Pagination primitives shared by list endpoints.

/// Page requested when the caller does not specify one.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;
/// Default cap applied to caller-supplied page sizes.
pub const MAX_PAGE_LIMIT: usize = 200;

/// One-based window over a sorted result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }

    /// Number of rows to skip. Pages below 1 start at the first row.
    pub fn offset(&self) -> i64 {
        (self.page - 1).max(0).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

/// Ceiling of `total / per_page`; zero when the page size is not positive.
pub fn total_pages(total: usize, per_page: i64) -> usize {
    match usize::try_from(per_page) {
        Ok(per_page) if per_page > 0 => total.div_ceil(per_page),
        _ => 0,
    }
}
