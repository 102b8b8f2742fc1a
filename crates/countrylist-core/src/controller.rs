// crates/countrylist-core/src/controller.rs

//! # List Controller
//!
//! The container of the list view. It owns the current [`QueryResult`] and
//! is its only writer. The keyword and page are never stored as the source
//! of truth here: they are re-read from the [`NavigationHistory`] on every
//! trigger.
//!
//! Triggers:
//! 1. [`ListController::mount`] — query for whatever the location holds.
//! 2. [`ListController::on_location_change`] — re-query only when the parsed
//!    `(keyword, page)` differs from the previous location.
//!
//! User actions ([`search`](ListController::search),
//! [`change_page`](ListController::change_page)) push a new entry and then
//! run trigger 2, the way a router notifies its subscribers after a push.

use crate::common::{FilterQuery, QueryResult};
use crate::config::ViewConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::history::NavigationHistory;
use crate::traits::CountrySearch;
use crate::url_state;
use crate::widgets::{ListView, Pagination};

pub struct ListController<'a, H> {
    dataset: &'a Dataset,
    history: H,
    config: ViewConfig,
    query: FilterQuery,
    result: QueryResult,
    fetches: usize,
}

impl<'a, H: NavigationHistory> ListController<'a, H> {
    pub fn new(dataset: &'a Dataset, history: H, config: ViewConfig) -> Self {
        let query = url_state::parse_query(&history.search(), config.page_size);
        Self {
            dataset,
            history,
            config,
            query,
            result: QueryResult::default(),
            fetches: 0,
        }
    }

    /// Initial mount: query immediately for the current location.
    pub fn mount(&mut self) -> &QueryResult {
        log::debug!("mount");
        self.query = self.location_query();
        self.fetch();
        &self.result
    }

    /// The location changed (push, back or forward). Returns `true` when the
    /// results were recomputed.
    pub fn on_location_change(&mut self) -> bool {
        let next = self.location_query();
        if next.key() == self.query.key() {
            log::debug!("location changed, query unchanged: {:?}", next.key());
            self.query = next;
            return false;
        }
        self.query = next;
        self.fetch();
        true
    }

    /// Commit a new keyword. Always lands on page 1.
    pub fn search(&mut self, keyword: &str) -> Result<bool> {
        self.navigate(&url_state::keyword_change(keyword))
    }

    /// Move to `page`, keeping the keyword currently in the location.
    pub fn change_page(&mut self, page: usize) -> Result<bool> {
        let current = self.location_query();
        self.navigate(&url_state::page_change(&current, page))
    }

    /// Search a random single letter; `unit` is a sample from `[0, 1)`.
    pub fn search_random(&mut self, unit: f64) -> Result<bool> {
        self.search(&random_keyword(unit))
    }

    fn navigate(&mut self, search: &str) -> Result<bool> {
        log::debug!("push ?{search}");
        self.history.push(search)?;
        Ok(self.on_location_change())
    }

    fn location_query(&self) -> FilterQuery {
        url_state::parse_query(&self.history.search(), self.config.page_size)
    }

    fn fetch(&mut self) {
        self.result = self.dataset.run(&self.query);
        self.fetches += 1;
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn result(&self) -> &QueryResult {
        &self.result
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// How many times the results have been computed.
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.result.total, self.config.page_size, self.query.page)
    }

    pub fn list_view(&self) -> ListView<'_> {
        ListView::new(&self.result)
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Direct access to the history, e.g. to go back. Call
    /// [`ListController::on_location_change`] afterwards.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}

/// Lowercase letter `a + floor(26 * unit)`; out-of-range samples clamp.
pub fn random_keyword(unit: f64) -> String {
    let index = if unit.is_finite() {
        (unit * 26.0).floor().clamp(0.0, 25.0) as u8
    } else {
        0
    };
    char::from(b'a' + index).to_string()
}
