// crates/countrylist-core/src/history.rs

//! Navigation history: the read-and-push interface over the navigable
//! location, plus an in-memory implementation with back/forward stacks.

use crate::error::Result;

/// The navigable location as seen by the list container.
pub trait NavigationHistory {
    /// Current query string, `?`-prefixed or empty (like `Location.search`).
    fn search(&self) -> String;

    /// Push `search` (without the leading `?`) as a new history entry.
    fn push(&mut self, search: &str) -> Result<()>;
}

impl<H: NavigationHistory + ?Sized> NavigationHistory for &mut H {
    fn search(&self) -> String {
        (**self).search()
    }

    fn push(&mut self, search: &str) -> Result<()> {
        (**self).push(search)
    }
}

/// History kept in memory. Pushing clears the forward stack.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    back_stack: Vec<String>,
    forward_stack: Vec<String>,
    current: String,
}

impl MemoryHistory {
    pub fn new(initial_search: &str) -> Self {
        Self {
            back_stack: Vec::new(),
            forward_stack: Vec::new(),
            current: normalize(initial_search),
        }
    }

    /// Step back one entry. Returns `false` when already at the oldest one.
    pub fn back(&mut self) -> bool {
        let Some(prev) = self.back_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.current, prev);
        self.forward_stack.push(current);
        true
    }

    pub fn forward(&mut self) -> bool {
        let Some(next) = self.forward_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.current, next);
        self.back_stack.push(current);
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// Total number of entries, including the current one.
    pub fn entry_count(&self) -> usize {
        self.back_stack.len() + 1 + self.forward_stack.len()
    }
}

impl NavigationHistory for MemoryHistory {
    fn search(&self) -> String {
        self.current.clone()
    }

    fn push(&mut self, search: &str) -> Result<()> {
        let next = normalize(search);
        let prev = std::mem::replace(&mut self.current, next);
        self.back_stack.push(prev);
        self.forward_stack.clear();
        Ok(())
    }
}

fn normalize(search: &str) -> String {
    let bare = search.strip_prefix('?').unwrap_or(search);
    if bare.is_empty() {
        String::new()
    } else {
        format!("?{bare}")
    }
}
