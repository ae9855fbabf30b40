//! Page/limit pagination

use serde::{Deserialize, Serialize};

/// Default page number
const DEFAULT_PAGE: u32 = 1;

/// Default items per page
const DEFAULT_LIMIT: u32 = 10;

/// Pagination parameters
///
/// No upper bound is placed on `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl Pagination {
    /// Create pagination; zero values fall back to the defaults.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// SQL OFFSET value: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        let offset = u64::from(self.page.saturating_sub(1)) * u64::from(self.limit);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination
///
/// Kept as raw strings: a value that is not a positive integer falls back to
/// its default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            parse_positive(params.page.as_deref(), DEFAULT_PAGE),
            parse_positive(params.limit.as_deref(), DEFAULT_LIMIT),
        )
    }
}

/// One page of results from a repository
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl<T> Paginated<T> {
    /// `ceil(total / limit)`; zero when there are no rows.
    pub fn total_pages(&self) -> i64 {
        let limit = i64::from(self.limit.max(1));
        (self.total.max(0) + limit - 1) / limit
    }
}

/// List response body: `{data, total, pages, page}`
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub pages: i64,
    pub page: u32,
}

impl<T> From<Paginated<T>> for PageResponse<T> {
    fn from(p: Paginated<T>) -> Self {
        let pages = p.total_pages();
        Self {
            data: p.items,
            total: p.total,
            pages,
            page: p.page,
        }
    }
}
