// crates/countrylist-core/src/lib.rs

//! # countrylist-core
//!
//! Platform-free core of the country list viewer: a bundled, immutable
//! dataset, a pure keyword filter + pagination engine, and the glue that
//! keeps the view state (keyword, page) in the navigable location's query
//! string.
//!
//! ```rust
//! use countrylist_core::prelude::*;
//!
//! let db = Dataset::from_records(vec![
//!     CountryRecord::new("1", "France"),
//!     CountryRecord::new("2", "Germany"),
//!     CountryRecord::new("3", "Finland"),
//! ])?;
//!
//! let page = db.query(Some("f"), 1, 2);
//! assert_eq!(page.total, 2);
//! assert_eq!(page.records[1].name(), "Finland");
//! # Ok::<(), countrylist_core::CountryListError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod history;
pub mod prelude;
pub mod search; // The query engine
pub mod text;
pub mod traits;
pub mod url_state;
pub mod widgets;

// Re-exports
pub use crate::common::{CountryRecord, DatasetStats, FilterQuery, QueryKey, QueryResult};
pub use crate::config::ViewConfig;
pub use crate::controller::ListController;
pub use crate::dataset::Dataset;
pub use crate::error::{CountryListError, Result};
pub use crate::history::{MemoryHistory, NavigationHistory};
pub use crate::traits::{CountrySearch, NameMatch};
