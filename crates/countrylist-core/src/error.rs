// crates/countrylist-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by dataset loading and navigation.
///
/// The query path itself never fails: malformed keywords and page numbers
/// are coerced to defaults instead.
#[derive(Debug, Error)]
pub enum CountryListError {
    /// The dataset source is not a JSON array of `{ "id", "name" }` objects.
    #[error("failed to parse country dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records in the dataset share the same id.
    #[error("duplicate country id in dataset: {0}")]
    DuplicateId(String),

    /// The navigation history refused a new entry.
    #[error("navigation failed: {0}")]
    Navigation(String),
}

pub type Result<T> = std::result::Result<T, CountryListError>;
