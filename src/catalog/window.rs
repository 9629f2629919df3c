//! Pagination window over the ranked product list.
//!
//! The window is a growable prefix: it starts at one page and grows by one page
//! per "load more". A new search resets it to one page; re-sorting does not.

/// Default number of items per page.
pub const PAGE_SIZE: usize = 20;

/// Counter-based pagination cursor.
///
/// # Examples
///
/// ```
/// use catalist::catalog::PageWindow;
///
/// let items: Vec<u32> = (0..25).collect();
/// let mut window = PageWindow::default();
///
/// assert_eq!(window.slice(&items).len(), 20);
/// assert!(window.has_more(items.len()));
///
/// window.advance();
/// assert_eq!(window.slice(&items).len(), 25);
/// assert!(!window.has_more(items.len()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    visible_count: usize,
    page_size: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PageWindow {
    /// Creates a window showing one page. A zero page size is raised to 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            visible_count: page_size,
            page_size,
        }
    }

    /// Number of items currently materialized.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Items added per advance.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Shrinks the window back to a single page.
    pub fn reset(&mut self) {
        self.visible_count = self.page_size;
    }

    /// Grows the window by one page.
    pub fn advance(&mut self) {
        self.visible_count = self.visible_count.saturating_add(self.page_size);
    }

    /// True when the ranked list holds items beyond the window.
    #[must_use]
    pub const fn has_more(&self, total: usize) -> bool {
        self.visible_count < total
    }

    /// Returns the visible prefix, `min(visible_count, len)` items long.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count.min(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_length_is_min_of_cursor_and_total() {
        let window = PageWindow::new(20);
        for total in [0_usize, 1, 19, 20, 21, 100] {
            let items: Vec<usize> = (0..total).collect();
            assert_eq!(window.slice(&items).len(), total.min(20));
            assert_eq!(window.has_more(total), 20 < total);
        }
    }

    #[test]
    fn reset_returns_to_one_page() {
        let mut window = PageWindow::new(5);
        window.advance();
        window.advance();
        assert_eq!(window.visible_count(), 15);
        window.reset();
        assert_eq!(window.visible_count(), 5);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let window = PageWindow::new(0);
        assert_eq!(window.page_size(), 1);
        assert_eq!(window.visible_count(), 1);
    }

    #[test]
    fn advancing_past_end_is_harmless() {
        let items = [1, 2, 3];
        let mut window = PageWindow::new(2);
        window.advance();
        window.advance();
        assert_eq!(window.slice(&items), &[1, 2, 3]);
        assert!(!window.has_more(items.len()));
    }
}
