//! countrylist-core prelude: bring common types and traits into scope.

pub use crate::common::{
    CountryRecord, DatasetStats, FilterQuery, QueryResult, DEFAULT_PAGE_SIZE, FIRST_PAGE,
};
pub use crate::config::ViewConfig;
pub use crate::controller::ListController;
pub use crate::dataset::Dataset;
pub use crate::error::{CountryListError, Result};
pub use crate::history::{MemoryHistory, NavigationHistory};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{CountrySearch, NameMatch};
pub use crate::widgets::{ListRow, ListView, PageIndicator, Pagination, SearchForm};
