//! Query normalization and the prefix filter that produces the result list.

use std::cmp::Ordering;

use crate::dictionary::Dictionary;

/// Trim surrounding whitespace; an empty result means "no query".
pub fn normalize_query(raw: &str) -> &str {
    raw.trim()
}

/// All dictionary words whose lowercase form starts with the lowercase query,
/// sorted with [`compare_words`]. An empty query matches nothing.
pub fn prefix_matches(dictionary: &Dictionary, query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();
    let mut results: Vec<String> = dictionary
        .words()
        .filter(|word| word.to_lowercase().starts_with(&query_lower))
        .map(str::to_owned)
        .collect();
    results.sort_by(|a, b| compare_words(a, b));
    results
}

/// Alphabetical order ignoring case first, lowercase before uppercase on ties.
///
/// No accent or locale collation is attempted.
pub fn compare_words(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
