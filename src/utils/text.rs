//! String formatting helpers
//!
//! Char-aware truncation and masking for display purposes.

/// Truncates a string to at most `max_chars` characters
///
/// Longer input is cut and suffixed with "...", keeping the result
/// within the limit. Counting is by `char`, so multi-byte text is never
/// split mid-character.
///
/// # Arguments
/// - `s` - The input string
/// - `max_chars` - Maximum length of the result in characters
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Masks all but the last `visible_last` characters with '*'
///
/// Useful for displaying credentials or account numbers. Input no
/// longer than `visible_last` is returned unchanged.
///
/// # Arguments
/// - `s` - The input string
/// - `visible_last` - Number of trailing characters left visible
pub fn mask(s: &str, visible_last: usize) -> String {
    let total = s.chars().count();
    if total <= visible_last {
        return s.to_string();
    }
    let hidden = total - visible_last;
    let mut out = "*".repeat(hidden);
    out.extend(s.chars().skip(hidden));
    out
}
