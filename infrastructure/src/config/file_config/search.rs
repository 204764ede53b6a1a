//! Search and HTTP configuration from TOML (`[search]` and `[http]` sections)

use serde::{Deserialize, Serialize};

/// Raw hospital search configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// DuckDuckGo HTML endpoint
    pub endpoint: String,
    /// Region code passed as `kl` (e.g. "us-en", "wt-wt" for no region)
    pub region: String,
    /// Maximum results shown per report
    pub max_results: usize,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://html.duckduckgo.com/html/".to_string(),
            region: "wt-wt".to_string(),
            max_results: 5,
        }
    }
}

/// Raw HTTP client configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Timeout in seconds for every external call
    pub timeout_seconds: u64,
    /// User-Agent header sent to external services
    pub user_agent: String,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("early-detect/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
