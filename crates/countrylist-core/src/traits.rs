// crates/countrylist-core/src/traits.rs
use crate::common::{CountryRecord, DatasetStats, FilterQuery, QueryResult};
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get case-insensitive helpers built on
/// [`fold_key`]:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use countrylist_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Finland").is_named("FINLAND"));
/// assert!(Place("Finland").name_contains("inl"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Case-insensitive substring match. An empty `q` matches every name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for CountryRecord {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Read-only search operations over the dataset.
pub trait CountrySearch {
    fn stats(&self) -> DatasetStats;

    fn find_by_id(&self, id: &str) -> Option<&CountryRecord>;

    /// Every record whose name contains `keyword`, in dataset order.
    ///
    /// `None` and `Some("")` both return the whole dataset.
    fn find_by_substring(&self, keyword: Option<&str>) -> Vec<&CountryRecord>;

    /// One page of the records matching `keyword`, plus the total number of
    /// matches across all pages.
    ///
    /// `page` is 1-based; page 0 is treated as page 1. A page past the end
    /// yields no records but still reports the full `total`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use countrylist_core::{CountryRecord, CountrySearch, Dataset};
    ///
    /// let db = Dataset::from_records(vec![
    ///     CountryRecord::new("1", "France"),
    ///     CountryRecord::new("2", "Germany"),
    /// ]).unwrap();
    ///
    /// let res = db.query(Some("GER"), 1, 20);
    /// assert_eq!(res.total, 1);
    /// assert_eq!(res.records[0].id(), "2");
    ///
    /// let past_end = db.query(None, 5, 20);
    /// assert!(past_end.records.is_empty());
    /// assert_eq!(past_end.total, 2);
    /// ```
    fn query(&self, keyword: Option<&str>, page: usize, page_size: usize) -> QueryResult;

    /// [`CountrySearch::query`] driven by a parsed [`FilterQuery`].
    fn run(&self, query: &FilterQuery) -> QueryResult {
        self.query(query.keyword(), query.page, query.page_size)
    }
}
