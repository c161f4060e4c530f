//! Char-counted string helpers.
//!
//! Offsets and lengths across the workspace are measured in chars so that
//! highlight ranges and truncation points never split a code point.

/// Number of chars in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Prefix of `s` holding at most `max_chars` chars
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Prefix of `s` holding at most `max_chars` chars, with "..." appended when cut
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    let prefix = truncate_chars(s, max_chars);
    if prefix.len() < s.len() {
        format!("{}...", prefix)
    } else {
        prefix.to_string()
    }
}
