//! Free-text normalization.
//!
//! ## Summary
//! Every comparison in the import and catalog code goes through
//! [`normalize_key`]: trimmed, Unicode case folded, decomposed to NFD with
//! combining marks removed, and whitespace runs collapsed to one space.
//! Output meant for people uses [`display_form`] instead.

use icu::casemap::CaseMapper;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Returns the trimmed display form of `text`.
#[must_use]
pub fn display_form(text: &str) -> String {
    text.trim().to_owned()
}

/// ## Summary
/// Builds the lookup key for `text`.
///
/// Folding runs before decomposition so that folds which introduce marks
/// (e.g. `İ` → `i̇`) are stripped as well.
///
/// ```
/// use rsvp_core::normalize::normalize_key;
/// assert_eq!(normalize_key("  Café   Crème "), "cafe creme");
/// ```
#[must_use]
pub fn normalize_key(text: &str) -> String {
    let folded = CaseMapper::new().fold_string(text.trim());

    let mut key = String::with_capacity(folded.len());
    let mut pending_space = false;

    for c in folded.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_whitespace() {
            pending_space = !key.is_empty();
            continue;
        }
        if pending_space {
            key.push(' ');
            pending_space = false;
        }
        key.push(c);
    }

    key
}

/// Returns whether two strings are equal after normalization.
#[must_use]
pub fn keys_match(a: &str, b: &str) -> bool {
    normalize_key(a) == normalize_key(b)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn strips_diacritics_and_case() {
        assert_eq!(normalize_key("ÑANDÚ"), "nandu");
        assert_eq!(normalize_key("Crème Brûlée"), "creme brulee");
        assert_eq!(normalize_key("Ação"), "acao");
    }

    #[test]
    fn folds_beyond_lowercase() {
        assert_eq!(normalize_key("Straße"), "strasse");
        assert_eq!(normalize_key("İstanbul"), "istanbul");
    }

    #[test]
    fn collapses_inner_whitespace() {
        assert_eq!(normalize_key("\tnom \n  complet  "), "nom complet");
    }

    #[test]
    fn empty_input_yields_empty_key() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("   "), "");
        assert_eq!(display_form("  "), "");
    }

    #[test]
    fn display_form_keeps_case_and_accents() {
        assert_eq!(display_form("  José Pérez "), "José Pérez");
    }

    #[test]
    fn keys_match_ignores_accents() {
        assert!(keys_match("Leche", "léche"));
        assert!(!keys_match("leche", "lechuga"));
    }

    proptest! {
        #[test]
        fn key_is_idempotent(s in "[a-zA-ZÀ-ÿ \\t]{0,40}") {
            let once = normalize_key(&s);
            prop_assert_eq!(normalize_key(&once), once.clone());
        }

        #[test]
        fn key_has_canonical_spacing(s in "\\PC*") {
            let key = normalize_key(&s);
            prop_assert!(!key.starts_with(' ') && !key.ends_with(' '), "{:?} is trimmed", key);
            prop_assert!(!key.contains("  "), "{:?} has no double spaces", key);
            prop_assert!(!key.chars().any(|c| c.is_whitespace() && c != ' '), "{:?} only uses ASCII spaces", key);
        }

        #[test]
        fn key_has_no_combining_marks(s in "\\PC*") {
            let key = normalize_key(&s);
            prop_assert!(!key.chars().any(is_combining_mark), "{:?} has no combining marks", key);
        }
    }
}
