// crates/countrylist-core/src/widgets/pagination.rs
use crate::common::FIRST_PAGE;
use crate::search::total_pages;

pub const ITEM_CLASS: &str = "pagination--item";
pub const CURRENT_ITEM_CLASS: &str = "pagination--item-current";

/// One clickable page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub page: usize,
    pub is_current: bool,
}

impl PageIndicator {
    pub fn class_name(&self) -> String {
        if self.is_current {
            format!("{ITEM_CLASS} {CURRENT_ITEM_CLASS}")
        } else {
            ITEM_CLASS.to_string()
        }
    }
}

/// Page indicators `1..=ceil(total / page_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total: usize,
    page_size: usize,
    current: usize,
}

impl Pagination {
    pub fn new(total: usize, page_size: usize, current: usize) -> Self {
        Self {
            total,
            page_size,
            current: current.max(FIRST_PAGE),
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn indicators(&self) -> Vec<PageIndicator> {
        (FIRST_PAGE..=self.total_pages())
            .map(|page| PageIndicator {
                page,
                is_current: page == self.current,
            })
            .collect()
    }

    /// A click on indicator `page`.
    ///
    /// Returns the page to report to the caller, or `None` when the click is
    /// a no-op: the current page, or a page that is not rendered.
    pub fn click(&self, page: usize) -> Option<usize> {
        if page == self.current || !(FIRST_PAGE..=self.total_pages()).contains(&page) {
            return None;
        }
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ceil_pages() {
        let p = Pagination::new(41, 20, 1);
        let pages: Vec<_> = p.indicators().iter().map(|i| i.page).collect();
        assert_eq!(pages, [1, 2, 3]);
    }

    #[test]
    fn zero_total_renders_nothing() {
        let p = Pagination::new(0, 20, 1);
        assert!(p.indicators().is_empty());
        assert_eq!(p.click(1), None);
    }

    #[test]
    fn current_page_is_marked() {
        let p = Pagination::new(60, 20, 2);
        let marked: Vec<_> = p
            .indicators()
            .into_iter()
            .filter(|i| i.is_current)
            .map(|i| i.page)
            .collect();
        assert_eq!(marked, [2]);
        assert_eq!(
            p.indicators()[1].class_name(),
            "pagination--item pagination--item-current"
        );
        assert_eq!(p.indicators()[0].class_name(), "pagination--item");
    }

    #[test]
    fn clicking_current_page_fires_nothing() {
        let p = Pagination::new(60, 20, 2);
        let mut fired = Vec::new();
        if let Some(page) = p.click(2) {
            fired.push(page);
        }
        assert!(fired.is_empty());
    }

    #[test]
    fn clicking_other_page_fires_once() {
        let p = Pagination::new(60, 20, 2);
        let mut fired = Vec::new();
        if let Some(page) = p.click(3) {
            fired.push(page);
        }
        assert_eq!(fired, [3]);
    }

    #[test]
    fn clicks_outside_range_are_ignored() {
        let p = Pagination::new(60, 20, 1);
        assert_eq!(p.click(0), None);
        assert_eq!(p.click(4), None);
    }

    #[test]
    fn current_page_beyond_range_marks_nothing() {
        let p = Pagination::new(10, 20, 7);
        assert!(p.indicators().iter().all(|i| !i.is_current));
        assert_eq!(p.click(1), Some(1));
    }
}
