// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::SubmitConfig;

/// Longest slice of a response body kept in an error message.
const MAX_ERROR_BODY: usize = 200;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &SubmitConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Shorten a response body for inclusion in a log line or error message.
pub fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_from_defaults() {
        assert!(create_async_client(&SubmitConfig::default()).is_ok());
    }

    #[test]
    fn test_excerpt_short_body_untouched() {
        assert_eq!(excerpt("  Invalid key  "), "Invalid key");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let body = "é".repeat(300);
        let short = excerpt(&body);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), MAX_ERROR_BODY + 3);
    }
}
