//! Enrichment configuration from TOML (`[enrichment]`, `[encyclopedia]`, `[generator]`)

use early_detect_domain::EnrichmentMode;
use serde::{Deserialize, Serialize};

/// Raw enrichment configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEnrichmentConfig {
    /// Which variant runs: "encyclopedia" or "narrative"
    pub mode: EnrichmentMode,
    /// Sentences requested for an encyclopedia summary
    pub summary_sentences: usize,
}

impl Default for FileEnrichmentConfig {
    fn default() -> Self {
        Self {
            mode: EnrichmentMode::Encyclopedia,
            summary_sentences: 4,
        }
    }
}

/// Raw encyclopedia configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEncyclopediaConfig {
    /// MediaWiki site root; the action API lives at `{base_url}/w/api.php`
    pub base_url: String,
    /// Fall back to the top search hit when no page has the exact title
    pub auto_suggest: bool,
}

impl Default for FileEncyclopediaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://en.wikipedia.org".to_string(),
            auto_suggest: true,
        }
    }
}

/// Raw generative model configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// Inference API base URL; requests go to `{base_url}/models/{model}`
    pub base_url: String,
    /// Model name on the registry
    pub model: String,
    /// Maximum number of generated tokens per answer
    pub max_new_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling probability mass
    pub top_p: f32,
    /// Environment variable holding the API token
    pub api_key_env: String,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-inference.huggingface.co".to_string(),
            model: "google/flan-t5-large".to_string(),
            max_new_tokens: 200,
            temperature: 0.7,
            top_p: 0.9,
            api_key_env: "HF_TOKEN".to_string(),
        }
    }
}

impl FileGeneratorConfig {
    /// Token read from the configured environment variable, if set and non-empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}
