//! Page parameters and the `Pagination` response header.

use axum::http::{HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::json;

use crate::domain::params::{DEFAULT_PAGE_SIZE, Page};
use crate::error::AppError;
use crate::utils::parse::{InputPolicy, parse_strict};

/// Response header carrying [`PaginationMeta`] as JSON.
pub static PAGINATION_HEADER: HeaderName = HeaderName::from_static("pagination");

/// Upper bound for `pageSize` unless configured otherwise.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// How request values are interpreted, taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestPolicy {
    pub input: InputPolicy,
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for RequestPolicy {
    fn default() -> Self {
        Self {
            input: InputPolicy::Reject,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl RequestPolicy {
    /// Builds a page from raw `pageNumber` / `pageSize` values.
    ///
    /// Both are parsed strictly regardless of the input policy. Absent values
    /// fall back to page 1 and the default page size.
    pub fn page(&self, number: Option<&str>, size: Option<&str>) -> Result<Page, AppError> {
        let number = match number.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => parse_strict::<i64>(raw, "pageNumber")?,
            None => 1,
        };
        let size = match size.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => parse_strict::<i64>(raw, "pageSize")?,
            None => self.default_page_size,
        };

        Page::new(number, size, self.max_page_size)
    }
}

/// Pagination metadata for one list response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub page_size: i64,
    pub total_count: i64,
}

impl PaginationMeta {
    pub fn new(page: &Page, total_count: i64) -> Self {
        Self {
            current_page: page.number(),
            total_pages: page.total_pages(total_count),
            page_size: page.size(),
            total_count,
        }
    }

    pub fn header_value(&self) -> Result<HeaderValue, AppError> {
        let encoded = serde_json::to_string(self)
            .map_err(|_| AppError::internal("Internal error", json!({})))?;
        HeaderValue::from_str(&encoded).map_err(|_| AppError::internal("Internal error", json!({})))
    }
}
