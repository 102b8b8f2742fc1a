// crates/countrylist-core/src/widgets/search_form.rs

/// Search box with an uncommitted draft.
///
/// The draft starts from the externally supplied keyword and is thrown away
/// whenever that keyword changes identity (see [`SearchForm::sync`]).
/// Keystrokes only touch the draft; the keyword is emitted on
/// [`SearchForm::submit`] or [`SearchForm::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    external: Option<String>,
    draft: String,
}

impl SearchForm {
    pub fn new(external: Option<&str>) -> Self {
        let external = identity(external);
        Self {
            draft: external.clone().unwrap_or_default(),
            external,
        }
    }

    /// Re-keys the form on the committed keyword. Returns `true` when the
    /// identity changed and the draft was reset.
    pub fn sync(&mut self, external: Option<&str>) -> bool {
        let external = identity(external);
        if external == self.external {
            return false;
        }
        *self = Self {
            draft: external.clone().unwrap_or_default(),
            external,
        };
        true
    }

    pub fn input(&mut self, text: &str) {
        self.draft.clear();
        self.draft.push_str(text);
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.external.as_deref().unwrap_or("")
    }

    /// Explicit submission: the draft becomes the committed keyword.
    pub fn submit(&self) -> String {
        self.draft.clone()
    }

    /// Explicit clear: empties the draft and commits the empty keyword.
    pub fn clear(&mut self) -> String {
        self.draft.clear();
        String::new()
    }
}

fn identity(external: Option<&str>) -> Option<String> {
    external.filter(|k| !k.is_empty()).map(str::to_owned)
}
