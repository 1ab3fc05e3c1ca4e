//! Text helpers
//!
//! All truncation limits in this crate are expressed in characters, not
//! bytes, so cuts must land on char boundaries (prompts and model replies
//! are mostly Cyrillic).

/// Return the first `max_chars` characters of `s`, or all of `s` if shorter.
///
/// Never splits a multi-byte character.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
