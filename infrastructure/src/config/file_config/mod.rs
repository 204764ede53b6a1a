//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod classifier;
mod enrichment;
mod output;
mod repl;
mod search;

pub use classifier::{ClassifierBackend, FileClassifierConfig};
pub use enrichment::{FileEncyclopediaConfig, FileEnrichmentConfig, FileGeneratorConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use search::{FileHttpConfig, FileSearchConfig};

use early_detect_application::DiagnosisParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("http.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("search.max_results cannot be 0")]
    ZeroMaxResults,

    #[error("enrichment.summary_sentences cannot be 0")]
    ZeroSummarySentences,

    #[error("generator.temperature must be greater than 0 for sampling (got {0})")]
    InvalidTemperature(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Disease classifier settings
    pub classifier: FileClassifierConfig,
    /// Enrichment variant selection
    pub enrichment: FileEnrichmentConfig,
    /// Encyclopedia lookup settings
    pub encyclopedia: FileEncyclopediaConfig,
    /// Generative model settings
    pub generator: FileGeneratorConfig,
    /// Hospital search settings
    pub search: FileSearchConfig,
    /// Shared HTTP client settings
    pub http: FileHttpConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive intake settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.http.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.search.max_results == 0 {
            issues.push(ConfigValidationError::ZeroMaxResults);
        }
        if self.enrichment.summary_sentences == 0 {
            issues.push(ConfigValidationError::ZeroSummarySentences);
        }
        if self.generator.temperature <= 0.0 {
            issues.push(ConfigValidationError::InvalidTemperature(
                self.generator.temperature.to_string(),
            ));
        }

        let required = [
            ("classifier.repo", &self.classifier.repo),
            ("classifier.filename", &self.classifier.filename),
            ("classifier.endpoint", &self.classifier.endpoint),
            ("generator.model", &self.generator.model),
            ("encyclopedia.base_url", &self.encyclopedia.base_url),
            ("search.endpoint", &self.search.endpoint),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyField(field));
            }
        }

        issues
    }

    /// Application parameters derived from this configuration.
    pub fn diagnosis_params(&self) -> DiagnosisParams {
        DiagnosisParams::default()
            .with_max_hospital_results(self.search.max_results)
            .with_summary_sentences(self.enrichment.summary_sentences)
            .with_enrichment_mode(self.enrichment.mode)
    }
}
