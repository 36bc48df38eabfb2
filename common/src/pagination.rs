//! Pager model for client-side paginated tables.

use std::ops::Range;

use crate::product_const::PAGER_WINDOW;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Requested 1-based page, as read from the URL.
    pub current: u64,
    pub page_size: u64,
    pub total: u64,
}

/// One slot of the numbered pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    Page(u64),
    Gap,
}

impl Pagination {
    pub fn new(current: u64, page_size: u64, total: u64) -> Self {
        Self { current, page_size: page_size.max(1), total }
    }

    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(self.page_size)
    }

    /// The page actually shown: at least 1, at most the last page.
    pub fn clamped_current(&self) -> u64 {
        self.current.clamp(1, self.page_count().max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.clamped_current() > 1
    }

    pub fn has_next(&self) -> bool {
        self.clamped_current() < self.page_count()
    }

    /// Index range of the rows on the shown page.
    pub fn row_range(&self) -> Range<usize> {
        let start = (self.clamped_current() - 1).saturating_mul(self.page_size).min(self.total);
        let end = start.saturating_add(self.page_size).min(self.total);
        start as usize..end as usize
    }

    /// First page, last page, and a window around the shown page, with gaps between.
    pub fn pager_items(&self) -> Vec<PagerItem> {
        let count = self.page_count();
        if count == 0 {
            return Vec::new();
        }
        let current = self.clamped_current();
        let half = PAGER_WINDOW / 2;
        let mut start = current.saturating_sub(half).max(1);
        let end = (start + PAGER_WINDOW - 1).min(count);
        start = end.saturating_sub(PAGER_WINDOW - 1).max(1);

        let mut items = Vec::new();
        if start > 1 {
            items.push(PagerItem::Page(1));
            if start > 2 {
                items.push(PagerItem::Gap);
            }
        }
        items.extend((start..=end).map(PagerItem::Page));
        if end < count {
            if end + 1 < count {
                items.push(PagerItem::Gap);
            }
            items.push(PagerItem::Page(count));
        }
        items
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::PagerItem::{Gap, Page};

    #[test]
    fn test_page_count() {
        assert_eq!(Pagination::new(1, 50, 0).page_count(), 0);
        assert_eq!(Pagination::new(1, 50, 1).page_count(), 1);
        assert_eq!(Pagination::new(1, 50, 50).page_count(), 1);
        assert_eq!(Pagination::new(1, 50, 51).page_count(), 2);
    }

    #[test]
    fn test_row_range() {
        assert_eq!(Pagination::new(3, 50, 120).row_range(), 100..120);
        assert_eq!(Pagination::new(1, 50, 120).row_range(), 0..50);
        assert_eq!(Pagination::new(1, 50, 0).row_range(), 0..0);
    }

    #[test]
    fn test_overflowing_page_is_clamped() {
        let pagination = Pagination::new(9, 50, 120);
        assert_eq!(pagination.clamped_current(), 3);
        assert_eq!(pagination.row_range(), 100..120);
        assert!(!pagination.has_next());
        assert!(pagination.has_previous());
        assert_eq!(Pagination::new(0, 50, 120).clamped_current(), 1);
    }

    #[test]
    fn test_pager_items() {
        assert!(Pagination::new(1, 50, 0).pager_items().is_empty());
        assert_eq!(Pagination::new(2, 50, 120).pager_items(), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            Pagination::new(1, 10, 200).pager_items(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(20)]
        );
        assert_eq!(
            Pagination::new(10, 10, 200).pager_items(),
            vec![Page(1), Gap, Page(8), Page(9), Page(10), Page(11), Page(12), Gap, Page(20)]
        );
        assert_eq!(
            Pagination::new(20, 10, 200).pager_items(),
            vec![Page(1), Gap, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            Pagination::new(4, 10, 70).pager_items(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }
}
