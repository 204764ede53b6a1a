//! Hospital search port
//!
//! Web search backend used by the hospital locator. Results are returned in
//! the backend's ranking order.

use async_trait::async_trait;
use early_detect_domain::HospitalResult;
use thiserror::Error;

/// Errors that can occur during a web search
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Search backend returned status {0}")]
    Status(u16),

    #[error("Failed to parse search results: {0}")]
    Parse(String),
}

#[async_trait]
pub trait HospitalSearch: Send + Sync {
    /// Run a free-text query, returning at most `max_results` hits
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<HospitalResult>, SearchError>;
}
