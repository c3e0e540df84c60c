//! Free-text country label normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a raw country label for lookup.
///
/// Applies compatibility decomposition, drops combining marks (so "Côte"
/// becomes "cote"), lower-cases and trims. Empty input gives an empty string.
pub fn normalize_text(raw: &str) -> String {
    raw.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}
