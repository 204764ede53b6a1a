//! Shared HTTP client construction

use crate::config::FileHttpConfig;
use std::time::Duration;

/// Build the `reqwest::Client` shared by every web adapter.
pub fn build_client(config: &FileHttpConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}

/// Truncated, single-line rendering of an error body for logs and messages.
pub(crate) fn body_excerpt(body: &str) -> String {
    early_detect_domain::core::string::truncate(
        &early_detect_domain::core::string::collapse_whitespace(body),
        200,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_with_defaults() {
        assert!(build_client(&FileHttpConfig::default()).is_ok());
    }

    #[test]
    fn test_body_excerpt() {
        let long = "x".repeat(500);
        assert_eq!(body_excerpt(&long).len(), 200);
        assert_eq!(body_excerpt("a\n  b"), "a b");
    }
}
