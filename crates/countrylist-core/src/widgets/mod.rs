// crates/countrylist-core/src/widgets/mod.rs

//! Presentational models for the three controls of the list view.
//!
//! They hold no query state of their own: the container passes the current
//! result and location in, and the renderer (DOM or otherwise) draws them.

pub mod list_view;
pub mod pagination;
pub mod search_form;

pub use list_view::{ListRow, ListView};
pub use pagination::{PageIndicator, Pagination};
pub use search_form::SearchForm;
