//! countrylist-wasm — WebAssembly front end for countrylist-core
//!
//! Embeds the country dataset in the WASM binary and mounts a searchable,
//! paginated list into the page. The keyword and page live in the URL
//! (`?keyword=<k>&page=<p>`), so every view can be bookmarked and
//! back/forward walks through earlier searches.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`),
//!   mounting into `<div id="root">` when the page has one
//! - `mount(root_id, page_size)` for pages that create the host element later
//! - Plain queries returning JSON-serializable objects:
//!   - `get_country_count()`
//!   - `query_countries("fr", 1, 20)` → `{ records: [{ id, name }], total }`
//!   - `parse_location("?keyword=fr&page=3")` → `{ keyword, page, page_size }`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { query_countries } from 'countrylist-wasm';
//!
//! async function main() {
//!   await init(); // loads the dataset, mounts into #root if present
//!   console.log(query_countries('land', 1, 20));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The root element may carry `data-page-size="<n>"` (default 20).
//! - See `index.html` and `style.css` for a Trunk-based demo setup.

mod app;
mod history;

pub use history::BrowserHistory;

use countrylist_core::common::DEFAULT_PAGE_SIZE;
use countrylist_core::url_state::parse_query;
use countrylist_core::{CountrySearch, Dataset, ViewConfig};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Id of the element mounted into on start-up.
pub const ROOT_ID: &str = "root";
/// Host attribute overriding the page size.
pub const PAGE_SIZE_ATTR: &str = "data-page-size";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    log::info!("Initializing country list WASM module...");

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        // Not in a browser (e.g. Node): the query API is still usable.
        return;
    };
    match document.get_element_by_id(ROOT_ID) {
        None => {
            log::info!("no #{ROOT_ID} element, waiting for an explicit mount()");
            return;
        }
        Some(root) if root.has_attribute(app::MOUNTED_ATTR) => return,
        Some(_) => {}
    }
    if let Err(err) = mount(ROOT_ID, None) {
        log::error!("start-up failed: {err:?}");
    }
}

fn dataset() -> Result<&'static Dataset, JsValue> {
    Dataset::bundled().map_err(|e| JsValue::from_str(&e.to_string()))
}

/* --------------------------------------------------------------------------
   Mounting
-------------------------------------------------------------------------- */

/// Mounts the list view into the element with id `root_id`.
///
/// `page_size` wins over the element's `data-page-size` attribute.
/// Mounting twice into the same element is an error.
#[wasm_bindgen]
pub fn mount(root_id: &str, page_size: Option<usize>) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{root_id}`")))?;

    let config = match page_size {
        Some(n) => ViewConfig::with_page_size(n),
        None => ViewConfig::from_attr(root.get_attribute(PAGE_SIZE_ATTR).as_deref()),
    };
    app::mount(&root, dataset()?, config)
}

/* --------------------------------------------------------------------------
   Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_country_count() -> Result<usize, JsValue> {
    Ok(dataset()?.len())
}

#[wasm_bindgen]
pub fn query_countries(
    keyword: Option<String>,
    page: usize,
    page_size: usize,
) -> Result<JsValue, JsValue> {
    let result = dataset()?.query(keyword.as_deref(), page, page_size);
    Ok(to_value(&result)?)
}

#[wasm_bindgen]
pub fn parse_location(search: &str, page_size: Option<usize>) -> Result<JsValue, JsValue> {
    let query = parse_query(search, page_size.unwrap_or(DEFAULT_PAGE_SIZE));
    Ok(to_value(&query)?)
}
