// crates/countrylist-core/src/search.rs
use crate::common::{CountryRecord, DatasetStats, QueryResult, FIRST_PAGE};
use crate::dataset::Dataset;
use crate::text::{fold_key, folded_contains};
use crate::traits::CountrySearch;

/// Number of pages needed to show `total` records, `page_size` at a time.
///
/// A zero page size yields zero pages.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Folded form of a keyword; `None` means "match everything".
fn folded_keyword(keyword: Option<&str>) -> Option<String> {
    keyword.filter(|k| !k.is_empty()).map(fold_key)
}

impl Dataset {
    /// Iterator over the records matching `keyword`, in dataset order.
    fn matching<'a>(&'a self, keyword: Option<&str>) -> impl Iterator<Item = &'a CountryRecord> {
        let q = folded_keyword(keyword);
        self.records()
            .iter()
            .zip(self.folded_names())
            .filter(move |(_, folded)| match &q {
                Some(q) => folded_contains(folded, q),
                None => true,
            })
            .map(|(record, _)| record)
    }
}

impl CountrySearch for Dataset {
    fn stats(&self) -> DatasetStats {
        DatasetStats {
            countries: self.len(),
        }
    }

    fn find_by_id(&self, id: &str) -> Option<&CountryRecord> {
        self.records().iter().find(|c| c.id == id)
    }

    fn find_by_substring(&self, keyword: Option<&str>) -> Vec<&CountryRecord> {
        self.matching(keyword).collect()
    }

    fn query(&self, keyword: Option<&str>, page: usize, page_size: usize) -> QueryResult {
        let start = page
            .max(FIRST_PAGE)
            .saturating_sub(1)
            .saturating_mul(page_size);

        // Single pass: count every match, keep only those inside the window.
        let mut total = 0usize;
        let mut records = Vec::with_capacity(page_size.min(self.len()));
        for record in self.matching(keyword) {
            if total >= start && records.len() < page_size {
                records.push(record.clone());
            }
            total += 1;
        }

        log::debug!(
            "query keyword={:?} page={} page_size={} -> {} of {}",
            keyword,
            page,
            page_size,
            records.len(),
            total
        );

        QueryResult { records, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FilterQuery;
    use proptest::prelude::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            CountryRecord::new("1", "France"),
            CountryRecord::new("2", "Germany"),
            CountryRecord::new("3", "Finland"),
        ])
        .unwrap()
    }

    fn names(res: &QueryResult) -> Vec<&str> {
        res.records.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn keyword_is_case_insensitive_and_keeps_dataset_order() {
        let db = sample();
        let res = db.query(Some("f"), 1, 2);
        assert_eq!(res.total, 2);
        assert_eq!(names(&res), ["France", "Finland"]);

        let upper = db.query(Some("F"), 1, 2);
        assert_eq!(upper, res);
    }

    #[test]
    fn page_past_end_is_empty_with_total() {
        let db = sample();
        let res = db.query(Some("f"), 2, 2);
        assert!(res.records.is_empty());
        assert_eq!(res.total, 2);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let res = sample().query(Some("xyz-no-match"), 1, 20);
        assert_eq!(res, QueryResult::default());
    }

    #[test]
    fn absent_and_empty_keyword_match_everything() {
        let db = sample();
        assert_eq!(db.query(None, 1, 20).total, 3);
        assert_eq!(db.query(Some(""), 1, 20).total, 3);
    }

    #[test]
    fn page_zero_is_first_page() {
        let db = sample();
        assert_eq!(db.query(None, 0, 2), db.query(None, 1, 2));
    }

    #[test]
    fn zero_page_size_returns_only_total() {
        let res = sample().query(None, 1, 0);
        assert!(res.records.is_empty());
        assert_eq!(res.total, 3);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let res = sample().query(None, usize::MAX, usize::MAX);
        assert!(res.records.is_empty());
        assert_eq!(res.total, 3);
    }

    #[test]
    fn run_uses_normalised_query() {
        let db = sample();
        let q = FilterQuery::new(Some("an"), 1, 20);
        assert_eq!(names(&db.run(&q)), ["France", "Germany", "Finland"]);
    }

    #[test]
    fn find_by_id_and_substring() {
        let db = sample();
        assert_eq!(db.find_by_id("2").map(|c| c.name()), Some("Germany"));
        assert!(db.find_by_id("9").is_none());
        assert_eq!(db.find_by_substring(Some("land")).len(), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    fn dataset_strategy() -> impl Strategy<Value = Dataset> {
        proptest::collection::vec("[a-zA-Z ]{0,12}", 0..60).prop_map(|names| {
            let records = names
                .into_iter()
                .enumerate()
                .map(|(i, n)| CountryRecord::new(i.to_string(), n))
                .collect();
            Dataset::from_records(records).unwrap()
        })
    }

    proptest! {
        #[test]
        fn total_is_independent_of_page(
            db in dataset_strategy(),
            keyword in "[a-z]{0,2}",
            size in 1usize..10,
            page in 1usize..20,
        ) {
            let first = db.query(Some(keyword.as_str()), 1, size).total;
            prop_assert_eq!(db.query(Some(keyword.as_str()), page, size).total, first);
        }

        #[test]
        fn pages_concatenate_to_full_filtered_sequence(
            db in dataset_strategy(),
            keyword in "[a-z]{0,2}",
            size in 1usize..10,
        ) {
            let expected: Vec<CountryRecord> =
                db.find_by_substring(Some(keyword.as_str())).into_iter().cloned().collect();

            let mut joined = Vec::new();
            let mut page = 1;
            loop {
                let res = db.query(Some(keyword.as_str()), page, size);
                if res.records.is_empty() {
                    break;
                }
                joined.extend(res.records);
                page += 1;
            }
            prop_assert_eq!(joined, expected);
        }

        #[test]
        fn page_length_is_bounded(
            db in dataset_strategy(),
            keyword in "[a-z]{0,2}",
            size in 1usize..10,
            page in 1usize..20,
        ) {
            let res = db.query(Some(keyword.as_str()), page, size);
            prop_assert!(res.records.len() <= size);
            if (page - 1) * size >= res.total {
                prop_assert!(res.records.is_empty());
            }
        }
    }
}
