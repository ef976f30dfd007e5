//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Highest page index served. Keeps `page * page_size` well inside an SQL `OFFSET`.
pub const MAX_PAGE: u64 = 1_000_000;

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub page_size: u64,
}

impl Pagination {
    /// Build from optional query values, falling back to the defaults.
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        Self { page: page.unwrap_or(1), page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE) }
    }

    /// Clamp to sane bounds and return `(zero_based_page, page_size)`.
    pub fn normalize(self) -> (u64, u64) {
        let page = self.page.clamp(1, MAX_PAGE);
        let page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        (page - 1, page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, page_size: DEFAULT_PAGE_SIZE } }
}

/// One page of results plus the numbers needed for the response `meta` block.
#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total: u64) -> Self {
        let total_pages = if page_size == 0 { 0 } else { total.div_ceil(page_size) };
        Self { items, page, page_size, total, total_pages }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (idx, size) = Pagination { page: 0, page_size: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(size, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, size) = Pagination { page: 5, page_size: 1000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(size, 100);
    }

    #[test]
    fn huge_page_is_capped() {
        let (idx, size) = Pagination::new(Some(u64::MAX), Some(10)).normalize();
        assert_eq!(idx, MAX_PAGE - 1);
        assert_eq!(size, 10);
        assert!(idx.checked_mul(MAX_PAGE_SIZE).is_some_and(|off| off <= i64::MAX as u64));
    }

    #[test]
    fn missing_query_values_use_defaults() {
        let p = Pagination::new(None, None);
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(Pagination::new(Some(3), Some(25)).normalize(), (2, 25));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Page::new(vec![0; 10], 2, 10, 25).total_pages, 3);
        assert_eq!(Page::<u8>::new(vec![], 1, 10, 0).total_pages, 0);
        assert_eq!(Page::<u8>::new(vec![], 1, 10, 10).total_pages, 1);
    }
}
