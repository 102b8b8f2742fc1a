// crates/countrylist-core/src/widgets/list_view.rs
use crate::common::{CountryRecord, QueryResult};

/// A rendered row, keyed by record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRow<'a> {
    pub key: &'a str,
    pub label: &'a str,
}

/// One row per record of the current page, in query order.
#[derive(Debug, Clone, Copy)]
pub struct ListView<'a> {
    records: &'a [CountryRecord],
}

impl<'a> ListView<'a> {
    pub fn new(result: &'a QueryResult) -> Self {
        Self {
            records: &result.records,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = ListRow<'a>> + 'a {
        let records = self.records;
        records.iter().map(|c| ListRow {
            key: c.id(),
            label: c.name(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
