//! Normalized filter parameter sets for the list endpoints.
//!
//! These are produced by the API layer from raw query strings. Every list is
//! already split, trimmed and lower-cased; an empty list means "no constraint".

use crate::error::AppError;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: i64,
    size: i64,
}

impl Page {
    /// Builds a page, clamping `number` to at least 1.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `pageSize` when `size` is not in
    /// `1..=max_size`.
    pub fn new(number: i64, size: i64, max_size: i64) -> Result<Self, AppError> {
        if size < 1 || size > max_size {
            return Err(AppError::invalid("pageSize"));
        }

        Ok(Self {
            number: number.max(1),
            size,
        })
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(self.size)
    }

    /// Number of pages needed for `total` rows.
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            0
        } else {
            (total + self.size - 1) / self.size
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Filters for the course list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseParams {
    pub page: Page,
    pub search_term: Option<String>,
    pub course_types: Vec<i32>,
    pub languages: Vec<String>,
    pub subjects: Vec<String>,
    pub institutions: Vec<String>,
    pub is_tu9: bool,
    pub is_u15: bool,
    pub has_articles: bool,
    /// Skip loading each course's article list.
    pub hide_related: bool,
}

/// Filters for the article list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleParams {
    pub page: Page,
    pub search_term: Option<String>,
    pub sources: Vec<String>,
    pub bs_schools: Vec<String>,
    pub bs_departments: Vec<String>,
    pub ms_schools: Vec<String>,
    pub ms_departments: Vec<String>,
    pub course_type: Option<i32>,
    /// Skip loading each article's course associations.
    pub hide_related: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_and_offset() {
        let page = Page::new(2, 10, 1000).unwrap();
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 10);
    }

    #[test]
    fn test_page_number_is_clamped() {
        assert_eq!(Page::new(0, 10, 1000).unwrap().number(), 1);
        assert_eq!(Page::new(-4, 10, 1000).unwrap().offset(), 0);
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(Page::new(1, 0, 1000).is_err());
        assert!(Page::new(1, -1, 1000).is_err());
        assert!(Page::new(1, 1001, 1000).is_err());
        assert!(Page::new(1, 1000, 1000).is_ok());
    }

    #[test]
    fn test_total_pages() {
        let page = Page::new(1, 10, 1000).unwrap();
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(11), 2);
    }

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(page.number(), 1);
        assert_eq!(page.size(), DEFAULT_PAGE_SIZE);
    }
}
