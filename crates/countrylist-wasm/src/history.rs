// crates/countrylist-wasm/src/history.rs
use countrylist_core::{CountryListError, NavigationHistory, Result};
use wasm_bindgen::JsValue;

/// `window.location.search` + `history.pushState`.
pub struct BrowserHistory {
    window: web_sys::Window,
}

impl BrowserHistory {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl NavigationHistory for BrowserHistory {
    fn search(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn push(&mut self, search: &str) -> Result<()> {
        let history = self.window.history().map_err(js_error)?;
        history
            .push_state_with_url(&JsValue::NULL, "", Some(&format!("?{search}")))
            .map_err(js_error)
    }
}

pub(crate) fn js_error(err: JsValue) -> CountryListError {
    CountryListError::Navigation(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
