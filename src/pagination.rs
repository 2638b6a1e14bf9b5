use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// One-based page window requested from a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Zero-based index of the first item on the page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// A page of items together with the metadata needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, per_page: usize, total_count: usize) -> Self {
        let page = if current_page == 0 { 1 } else { current_page };
        let per_page = per_page.max(1);

        Self {
            items,
            page,
            per_page,
            total_count,
            total_pages: total_count.div_ceil(per_page),
            has_more: page.saturating_mul(per_page) < total_count,
        }
    }

    /// An empty page that still reports the requested position.
    pub fn empty(current_page: usize, per_page: usize) -> Self {
        Self::new(Vec::new(), current_page, per_page, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_partial_page_has_no_more() {
        let page = Paginated::new(vec![1, 2, 3, 4, 5], 3, 10, 25);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_more);
    }

    #[test]
    fn middle_page_has_more() {
        let page = Paginated::new(vec![0; 10], 2, 10, 25);
        assert!(page.has_more);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn exact_multiple_rounds_pages_down() {
        let page = Paginated::new(vec![0; 10], 2, 10, 20);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_more);
    }

    #[test]
    fn empty_page_reports_zero_totals() {
        let page: Paginated<i32> = Paginated::empty(4, 20);
        assert_eq!(page.page, 4);
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_more);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(Pagination { page: 1, per_page: 10 }.offset(), 0);
        assert_eq!(Pagination { page: 3, per_page: 10 }.offset(), 20);
        assert_eq!(Pagination { page: 0, per_page: 10 }.offset(), 0);
    }

    #[test]
    fn huge_page_offset_saturates() {
        let pagination = Pagination {
            page: usize::MAX / 50,
            per_page: 100,
        };
        assert_eq!(pagination.offset(), usize::MAX);
    }
}
