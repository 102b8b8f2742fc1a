// crates/countrylist-core/src/url_state.rs

//! # URL State
//!
//! The keyword and page live in the location's query string, never in
//! component state. This module is the only place that reads or writes it.
//!
//! - read: `keyword` absent/empty means no filter; `page` absent or not a
//!   positive integer means page 1; other parameters are ignored.
//! - write: always `keyword=<k>&page=<p>`, form-urlencoded.

use crate::common::{FilterQuery, FIRST_PAGE};
use url::form_urlencoded;

pub const KEYWORD_PARAM: &str = "keyword";
pub const PAGE_PARAM: &str = "page";

/// Parses a query string (with or without the leading `?`).
///
/// The first occurrence of a repeated parameter wins.
///
/// ```rust
/// use countrylist_core::url_state::parse_query;
///
/// let q = parse_query("?keyword=fr&page=3&utm=x", 20);
/// assert_eq!(q.keyword(), Some("fr"));
/// assert_eq!(q.page, 3);
///
/// let q = parse_query("page=abc", 20);
/// assert_eq!((q.keyword(), q.page), (None, 1));
/// ```
pub fn parse_query(search: &str, page_size: usize) -> FilterQuery {
    let search = search.strip_prefix('?').unwrap_or(search);

    let mut keyword: Option<String> = None;
    let mut page: Option<usize> = None;
    for (name, value) in form_urlencoded::parse(search.as_bytes()) {
        match name.as_ref() {
            KEYWORD_PARAM if keyword.is_none() => keyword = Some(value.into_owned()),
            PAGE_PARAM if page.is_none() => page = Some(parse_page(&value)),
            _ => {}
        }
    }

    FilterQuery::new(keyword.as_deref(), page.unwrap_or(FIRST_PAGE), page_size)
}

/// Leading decimal digits after trimming (`"3px"` is page 3), or
/// [`FIRST_PAGE`] when there are none or they read as 0.
pub fn parse_page(raw: &str) -> usize {
    let raw = raw.trim();
    let digits = raw
        .find(|c: char| !c.is_ascii_digit())
        .map_or(raw, |end| &raw[..end]);
    digits
        .parse::<usize>()
        .ok()
        .filter(|p| *p >= FIRST_PAGE)
        .unwrap_or(FIRST_PAGE)
}

/// Serialises `keyword=<k>&page=<p>`; a missing keyword is written empty.
pub fn build_search(keyword: Option<&str>, page: usize) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(KEYWORD_PARAM, keyword.unwrap_or(""))
        .append_pair(PAGE_PARAM, &page.max(FIRST_PAGE).to_string())
        .finish()
}

pub fn to_search(query: &FilterQuery) -> String {
    build_search(query.keyword(), query.page)
}

/// Location for a newly committed keyword: always back to page 1.
pub fn keyword_change(keyword: &str) -> String {
    build_search(Some(keyword), FIRST_PAGE)
}

/// Location for a page change: keeps the current keyword.
pub fn page_change(current: &FilterQuery, page: usize) -> String {
    build_search(current.keyword(), page)
}
