// crates/countrylist-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Records shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Pages are 1-based.
pub const FIRST_PAGE: usize = 1;

/// A single entry of the static dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryRecord {
    pub id: String,
    pub name: String,
}

impl CountryRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Keyword + page cursor derived from the current location.
///
/// Construct it through [`FilterQuery::new`] to get the normalised form:
/// an empty keyword becomes `None`, page and page size are at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub keyword: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl FilterQuery {
    pub fn new(keyword: Option<&str>, page: usize, page_size: usize) -> Self {
        Self {
            keyword: keyword.filter(|k| !k.is_empty()).map(str::to_owned),
            page: page.max(FIRST_PAGE),
            page_size: page_size.max(1),
        }
    }

    #[inline]
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }

    /// Index of the first record on this page within the filtered sequence.
    pub fn offset(&self) -> usize {
        self.page
            .max(FIRST_PAGE)
            .saturating_sub(1)
            .saturating_mul(self.page_size)
    }

    /// The part of the query that decides whether results must be recomputed.
    pub fn key(&self) -> QueryKey {
        QueryKey {
            keyword: self.keyword().map(str::to_owned),
            page: self.page.max(FIRST_PAGE),
        }
    }
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            page: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Identity of a query as seen by the container: `(keyword, page)`.
/// An empty keyword and an absent one compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub keyword: Option<String>,
    pub page: usize,
}

/// One page of matches plus the total match count across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub records: Vec<CountryRecord>,
    pub total: usize,
}

/// Simple aggregate statistics for the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub countries: usize,
}
