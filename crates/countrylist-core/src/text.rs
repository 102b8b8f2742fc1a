// crates/countrylist-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// By default this is plain Unicode lowercasing. With the `ascii_fold`
/// feature the string is first transliterated to ASCII with `deunicode`,
/// so `Åland` folds to `aland` and `Türkiye` to `turkiye`.
///
/// # Examples
///
/// ```rust
/// use countrylist_core::text::fold_key;
///
/// assert_eq!(fold_key("FRANCE"), "france");
/// ```
#[cfg(not(feature = "ascii_fold"))]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(feature = "ascii_fold")]
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Equality after folding both sides with [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Substring test on already-folded haystack against a raw needle.
#[inline]
pub(crate) fn folded_contains(folded_haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || folded_haystack.contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding_is_case_insensitive() {
        assert!(equals_folded("Germany", "GERMANY"));
        assert!(!equals_folded("Germany", "France"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(folded_contains("france", ""));
        assert!(folded_contains("", ""));
    }

    #[cfg(feature = "ascii_fold")]
    #[test]
    fn ascii_fold_strips_diacritics() {
        assert_eq!(fold_key("Åland Islands"), "aland islands");
        assert!(equals_folded("Curaçao", "curacao"));
    }

    #[cfg(not(feature = "ascii_fold"))]
    #[test]
    fn diacritics_are_kept_by_default() {
        assert_eq!(fold_key("Åland"), "åland");
        assert!(!equals_folded("Curaçao", "curacao"));
    }
}
