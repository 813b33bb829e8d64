//! DTOs exposed by the product index endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::product_index::ProductIndex;
use crate::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};

/// Raw query string accepted by `GET /api/products/index`.
///
/// Every value arrives as text so malformed numbers can fall back to their
/// defaults instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ProductIndexParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// Typed filter and paging options for the product index.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ProductIndexQuery {
    /// Sync status to match; `active` when absent.
    pub status: Option<String>,
    /// Exact category to match.
    pub category: Option<String>,
    /// Substring matched against name or description.
    #[validate(length(max = 200))]
    pub search: Option<String>,
    #[validate(range(min = 1))]
    pub page: i64,
    #[validate(range(min = 1))]
    pub limit: i64,
}

impl Default for ProductIndexQuery {
    fn default() -> Self {
        Self {
            status: None,
            category: None,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_or_default(name: &str, raw: Option<&str>, default: i64) -> i64 {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => default,
        Some(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("Malformed `{name}` parameter {value:?}, using {default}");
            default
        }),
    }
}

impl From<ProductIndexParams> for ProductIndexQuery {
    fn from(params: ProductIndexParams) -> Self {
        Self {
            page: parse_or_default("page", params.page.as_deref(), DEFAULT_PAGE),
            limit: parse_or_default("limit", params.limit.as_deref(), DEFAULT_PAGE_LIMIT),
            status: non_empty(params.status),
            category: non_empty(params.category),
            search: non_empty(params.search),
        }
    }
}

/// One page of the product index plus pagination metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIndexPage {
    pub products: Vec<ProductIndex>,
    pub total_pages: usize,
    pub current_page: i64,
    pub total: usize,
}

/// Error payload returned by the JSON API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
