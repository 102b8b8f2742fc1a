//! Error handling example for countrylist-rs
//!
//! Dataset problems are errors; bad query input is not.

use countrylist_core::prelude::*;
use countrylist_core::url_state::parse_query;

fn main() -> Result<()> {
    env_logger::init();
    println!("=== countrylist-rs Error Handling Example ===\n");

    // Example 1: malformed dataset
    println!("--- Example 1: Malformed dataset JSON ---");
    match Dataset::from_json(r#"{"id": "FR"}"#) {
        Ok(db) => println!("  unexpectedly loaded {} records", db.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: duplicate ids
    println!("--- Example 2: Duplicate ids ---");
    let dup = Dataset::from_records(vec![
        CountryRecord::new("FR", "France"),
        CountryRecord::new("FR", "French Republic"),
    ]);
    if let Err(e) = dup {
        println!("  ✗ {e}");
    }
    println!();

    // Example 3: bad locations degrade to defaults
    println!("--- Example 3: Malformed locations ---");
    for search in ["?page=abc", "?page=0", "?keyword=&page=-4", "?foo=bar", ""] {
        let q = parse_query(search, DEFAULT_PAGE_SIZE);
        println!("  {search:<20} -> keyword={:?} page={}", q.keyword(), q.page);
    }
    println!();

    // Example 4: out-of-range pages are empty, not errors
    println!("--- Example 4: Page beyond the end ---");
    let db = Dataset::bundled()?;
    let res = db.query(Some("germany"), 50, DEFAULT_PAGE_SIZE);
    println!("  records: {}, total: {}", res.records.len(), res.total);

    Ok(())
}
