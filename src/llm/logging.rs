// src/llm/logging.rs
// Shared provider logging helpers

use tracing::{info, warn};

use super::ProviderError;

/// Log a successful provider call.
pub fn log_completion(provider: &str, duration_ms: u64, status: u16, body_len: usize) {
    info!(
        duration_ms = duration_ms,
        status = status,
        body_len = body_len,
        "{} generation complete", provider
    );
}

/// Log a failed provider call. The body preview is already truncated by the caller.
pub fn log_failure(provider: &str, duration_ms: u64, error: &ProviderError) {
    warn!(
        duration_ms = duration_ms,
        error = %error,
        "{} generation failed", provider
    );
}

/// First `max_chars` characters of a response body, for log and error messages
pub fn preview(body: &str, max_chars: usize) -> String {
    let mut out: String = body.chars().take(max_chars).collect();
    if body.chars().nth(max_chars).is_some() {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_body_unchanged() {
        assert_eq!(preview("short", 10), "short");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("ééééé", 3), "ééé…");
    }
}
