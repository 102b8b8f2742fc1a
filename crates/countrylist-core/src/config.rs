// crates/countrylist-core/src/config.rs
use crate::common::DEFAULT_PAGE_SIZE;

/// Runtime settings for a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Records per page, always at least 1.
    pub page_size: usize,
}

impl ViewConfig {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Reads the page size from a host attribute such as `data-page-size`.
    /// Missing, zero or unparseable values keep the default.
    pub fn from_attr(page_size: Option<&str>) -> Self {
        page_size
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .map(Self::with_page_size)
            .unwrap_or_default()
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
