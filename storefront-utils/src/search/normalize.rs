//! Query normalization for product names and queries.
//!
//! Substring matching compares trimmed, lowercased text only, so accents stay
//! significant there. Initials matching also strips diacritics.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Lowercase and strip diacritics.
///
/// `đ` has no canonical decomposition and is mapped to `d` explicitly.
fn fold_accents(raw: &str) -> String {
    raw.to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .map(|ch| if ch == 'đ' { 'd' } else { ch })
        .collect()
}

/// Normalize a raw query or name for substring matching: trim, lowercase.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Fold accents and drop every whitespace character, for initials matching.
pub fn compact_query(raw: &str) -> String {
    fold_accents(raw)
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

/// First character of each whitespace-separated word of the folded name.
pub fn name_initials(name: &str) -> String {
    fold_accents(name)
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
