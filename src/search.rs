//! Case-insensitive substring search over note content.

/// Prepares a raw query for matching.
///
/// Returns `None` when the query is blank, meaning "no filter".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Returns whether `content` contains an already normalized query.
///
/// Plain containment: no tokenizing, no fuzzy matching, no ranking.
pub fn matches(content: &str, normalized_query: &str) -> bool {
    content.to_lowercase().contains(normalized_query)
}
