//! Substring search helpers.
//!
//! Listing filters are case-insensitive substring matches. PostgreSQL gets an
//! `ILIKE` pattern with the wildcard characters of the user query escaped; the
//! in-memory store uses [`matches_filter`] directly.

/// Builds an `ILIKE` pattern matching `query` anywhere in the column.
///
/// `%`, `_` and `\` in the query are matched literally.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');

    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_filter(value: &str, query: &str) -> bool {
    query.is_empty() || value.to_lowercase().contains(&query.to_lowercase())
}
