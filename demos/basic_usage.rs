//! Basic usage example for countrylist-rs
//!
//! Loads the bundled dataset and runs a few keyword + page queries.

use countrylist_core::prelude::*;

fn main() -> Result<()> {
    env_logger::init();
    println!("=== countrylist-rs Basic Usage ===\n");

    let db = Dataset::bundled()?;
    println!("✓ Loaded {} countries\n", db.stats().countries);

    // Example 1: first page, no keyword
    println!("--- Example 1: First page of everything ---");
    let page = db.query(None, 1, 5);
    for c in &page.records {
        println!("  {} ({})", c.name(), c.id());
    }
    println!("  … {} in total\n", page.total);

    // Example 2: keyword, case-insensitive
    println!("--- Example 2: Keyword \"LAND\" ---");
    let pagination = Pagination::new(db.query(Some("LAND"), 1, 5).total, 5, 1);
    for indicator in pagination.indicators() {
        let res = db.query(Some("LAND"), indicator.page, 5);
        let names: Vec<_> = res.records.iter().map(|c| c.name()).collect();
        println!("  page {}: {}", indicator.page, names.join(", "));
    }
    println!();

    // Example 3: out-of-range page
    println!("--- Example 3: Page past the end ---");
    let res = db.query(Some("france"), 9, DEFAULT_PAGE_SIZE);
    println!("  records: {}, total: {}", res.records.len(), res.total);

    Ok(())
}
