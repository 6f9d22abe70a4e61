//! src/utils.rs
//! Shared string and path helpers

/// Truncate a string to at most `max_chars` characters, appending "..." when cut.
///
/// Counts characters rather than bytes so multi-byte input never splits.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}...", &s[..idx]),
    }
}

/// Last path component of a path-like string.
///
/// Handles both `/` and `\` separators and ignores trailing separators.
/// Returns the input unchanged when it has no separator.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return path;
    }
    match trimmed.rfind(['/', '\\']) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// First line of a possibly multi-line string, trimmed
pub fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or("").trim()
}
