// crates/countrylist-core/src/dataset.rs

//! # Dataset
//!
//! The immutable, ordered list of countries every query runs against.
//! Loaded once (from JSON) and never mutated afterwards.

use crate::common::CountryRecord;
use crate::error::{CountryListError, Result};
use crate::text::fold_key;
use std::collections::HashSet;
use std::io::Read;

#[cfg(feature = "bundled")]
use once_cell::sync::OnceCell;

/// The dataset shipped with the crate: a JSON array of `{ "id", "name" }`.
#[cfg(feature = "bundled")]
pub const BUNDLED_JSON: &str = include_str!("../data/countries.json");

// Single in-process cache so the bundled JSON is parsed only once.
#[cfg(feature = "bundled")]
static BUNDLED: OnceCell<Dataset> = OnceCell::new();

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<CountryRecord>,
    // Folded names, index-aligned with `records`. Baked at load time so a
    // query folds only the keyword.
    folded: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from records in display order.
    ///
    /// Fails with [`CountryListError::DuplicateId`] when two records share an id.
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CountryListError::DuplicateId(record.id.clone()));
            }
        }

        let folded = records.iter().map(|c| fold_key(&c.name)).collect();
        Ok(Self { records, folded })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CountryRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<CountryRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    /// The dataset embedded in the binary, parsed on first use.
    #[cfg(feature = "bundled")]
    #[cfg_attr(docsrs, doc(cfg(feature = "bundled")))]
    pub fn bundled() -> Result<&'static Dataset> {
        BUNDLED.get_or_try_init(|| {
            let db = Self::from_json(BUNDLED_JSON)?;
            log::info!("loaded {} countries from bundled dataset", db.len());
            Ok(db)
        })
    }

    #[inline]
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    #[inline]
    pub(crate) fn folded_names(&self) -> &[String] {
        &self.folded
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Dataset::from_records(vec![
            CountryRecord::new("1", "France"),
            CountryRecord::new("1", "Germany"),
        ])
        .unwrap_err();
        assert!(matches!(err, CountryListError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn from_json_keeps_order() {
        let db = Dataset::from_json(r#"[{"id":"b","name":"Beta"},{"id":"a","name":"Alpha"}]"#)
            .unwrap();
        let ids: Vec<_> = db.records().iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Dataset::from_json(r#"{"id":"a"}"#).unwrap_err();
        assert!(matches!(err, CountryListError::Json(_)));
    }

    #[test]
    fn from_reader_parses_bytes() {
        let db = Dataset::from_reader(&br#"[{"id":"1","name":"France"}]"#[..]).unwrap();
        assert_eq!(db.len(), 1);
    }

    #[cfg(feature = "bundled")]
    #[test]
    fn bundled_dataset_loads_once() {
        let a = Dataset::bundled().unwrap();
        let b = Dataset::bundled().unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(a.len() > 200);
    }
}
