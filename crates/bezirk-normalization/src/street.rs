//! Street-name normalization.
//!
//! The key is intentionally lossy: "Hauptstraße", "Hauptstr" and "Hauptstr."
//! all collapse to `hauptstr.`. No diacritic stripping or locale-aware
//! folding happens beyond plain lowercasing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// "str" plus any dots already following it, so re-normalizing is a no-op.
static STR_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"str\.*").expect("Invalid street abbreviation regex"));

static TRAILING_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.+$").expect("Invalid trailing dot regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("Invalid dash regex"));

/// Normalized street name used for rule matching and table lookup.
///
/// Only [`normalize_street_name`] constructs keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StreetKey(String);

impl StreetKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring test used by street rule markers.
    pub fn contains(&self, marker: &str) -> bool {
        self.0.contains(marker)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StreetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StreetKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalize a free-text street name into a [`StreetKey`].
///
/// Steps, in order: lowercase, `straße` -> `str.`, `str` -> `str.`, trailing
/// dot run -> single dot, whitespace runs -> `-`, dash runs -> single `-`.
pub fn normalize_street_name(raw: &str) -> StreetKey {
    let lowered = raw.to_lowercase();
    let expanded = lowered.replace("straße", "str.");
    let abbreviated = STR_ABBREVIATION.replace_all(&expanded, "str.");
    let dotted = TRAILING_DOTS.replace(&abbreviated, ".");
    let dashed = WHITESPACE.replace_all(&dotted, "-");
    let collapsed = DASHES.replace_all(&dashed, "-");
    StreetKey(collapsed.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> String {
        normalize_street_name(raw).as_str().to_string()
    }

    #[test]
    fn street_suffix_variants_collapse() {
        assert_eq!(key("Hauptstraße"), "hauptstr.");
        assert_eq!(key("Hauptstr"), "hauptstr.");
        assert_eq!(key("Hauptstr."), "hauptstr.");
        assert_eq!(key("HAUPTSTR.."), "hauptstr.");
    }

    #[test]
    fn whitespace_and_dashes_collapse() {
        assert_eq!(key("Konrad Adenauer  Straße"), "konrad-adenauer-str.");
        assert_eq!(key("Konrad - Adenauer-Straße"), "konrad-adenauer-str.");
        assert_eq!(key("unknown lane"), "unknown-lane");
        assert_eq!(key("Am\tRheinblick"), "am-rheinblick");
    }

    #[test]
    fn str_inside_words_is_abbreviated_too() {
        assert_eq!(key("Strandweg"), "str.andweg");
        assert_eq!(key("Industriestraße"), "industr.iestr.");
    }

    #[test]
    fn trailing_dot_run_collapses() {
        assert_eq!(key("Weg..."), "weg.");
        assert_eq!(key("a..b"), "a..b");
    }

    #[test]
    fn no_diacritic_stripping() {
        assert_eq!(key("Mühlenweg"), "mühlenweg");
        assert_ne!(key("Mühlenweg"), key("Muhlenweg"));
    }

    #[test]
    fn empty_input_gives_empty_key() {
        assert!(normalize_street_name("").is_empty());
    }
}
