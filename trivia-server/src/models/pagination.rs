//! Pagination over ordered result lists

use serde::Deserialize;

/// Questions returned per page
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Maximum items per page
const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (max 100)
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page is clamped to 1..=100
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Number of items skipped before this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.per_page as usize
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }

    /// Select this page out of the full ordered list.
    ///
    /// A page past the end yields an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit()).min(items.len());
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: QUESTIONS_PER_PAGE,
        }
    }
}

/// `?page=N` query parameter.
///
/// Kept as a string: an absent or non-integer value means page 1,
/// zero and negative pages clamp to 1.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        let page = params
            .page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .map(|p| p.clamp(1, u32::MAX as i64) as u32)
            .unwrap_or(1);
        Self::new(page, QUESTIONS_PER_PAGE)
    }
}
