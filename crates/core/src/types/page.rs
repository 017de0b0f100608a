//! Offset-based page of results.

use serde::{Deserialize, Serialize};

/// A single page of a stable-ordered listing.
///
/// `page` is zero-based. `total_pages` is derived from `total_elements`
/// and `size`, rounding up; an empty result set has zero pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The rows on this page.
    pub content: Vec<T>,
    /// Zero-based page index that was requested.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    /// Total number of rows across all pages.
    pub total_elements: u64,
    /// Total number of pages at this page size.
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Assemble a page from its rows and the overall row count.
    #[must_use]
    pub fn new(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(size))
        };
        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }

    /// Map the page contents, preserving the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 0, 10, 23);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn empty_page_has_zero_pages() {
        let page: Page<i32> = Page::new(vec![], 0, 10, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.content.is_empty());
    }

    #[test]
    fn map_preserves_metadata() {
        let page = Page::new(vec![1, 2], 1, 2, 4).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 2);
    }
}
