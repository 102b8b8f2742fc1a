//! URL navigation example for countrylist-rs
//!
//! Drives the list controller headlessly: searches and page changes become
//! history entries, and back/forward restores earlier results.

use countrylist_core::prelude::*;

fn show(c: &ListController<'_, MemoryHistory>) {
    let names: Vec<_> = c.list_view().rows().map(|r| r.label).collect();
    println!(
        "  {:<28} page {}/{} of {:>3}: {}",
        c.history().search(),
        c.query().page,
        c.pagination().total_pages(),
        c.result().total,
        names.join(", ")
    );
}

fn main() -> Result<()> {
    env_logger::init();
    println!("=== countrylist-rs URL Navigation ===\n");

    let db = Dataset::bundled()?;
    let mut controller = ListController::new(
        db,
        MemoryHistory::new("?keyword=an&page=2"),
        ViewConfig::with_page_size(4),
    );
    controller.mount();
    show(&controller);

    let mut form = SearchForm::new(controller.query().keyword());
    form.input("ia");
    controller.search(&form.submit())?;
    show(&controller);

    if let Some(page) = controller.pagination().click(3) {
        controller.change_page(page)?;
    }
    show(&controller);

    println!("\n--- back, back, forward ---");
    for step in [MemoryHistory::back, MemoryHistory::back, MemoryHistory::forward] {
        step(controller.history_mut());
        controller.on_location_change();
        show(&controller);
    }

    println!("\nqueries computed: {}", controller.fetch_count());
    Ok(())
}
