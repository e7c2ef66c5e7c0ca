// src/reply/normalize.rs
// Cleanup of provider output before it is returned as a reply

use super::prompt::REPLY_MARKER;

/// Shortest reply (in characters) that is returned instead of a fallback
pub const MIN_REPLY_CHARS: usize = 10;

/// Trim the text and drop anything up to the last reply marker.
///
/// An empty segment after the marker keeps the trimmed text as-is.
pub fn normalize_reply(text: &str) -> String {
    let trimmed = text.trim();

    match trimmed.rsplit_once(REPLY_MARKER) {
        Some((_, tail)) if !tail.trim().is_empty() => tail.trim().to_string(),
        _ => trimmed.to_string(),
    }
}

/// Whether normalized text is long enough to hand back to the caller
pub fn is_usable(text: &str) -> bool {
    text.chars().count() >= MIN_REPLY_CHARS
}
