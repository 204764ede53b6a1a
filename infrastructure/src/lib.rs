//! Infrastructure layer for early-detect
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod classifier;
pub mod config;
pub mod encyclopedia;
pub mod generation;
pub mod http;
pub mod search;

// Re-export commonly used types
pub use classifier::{ClassifierLoader, LocalClassifier, ModelArtifact, RemoteClassifier};
pub use config::{
    ClassifierBackend, ConfigLoader, ConfigValidationError, FileClassifierConfig, FileConfig,
    FileEncyclopediaConfig, FileEnrichmentConfig, FileGeneratorConfig, FileHttpConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig, FileSearchConfig,
};
pub use encyclopedia::WikipediaClient;
pub use generation::{GeneratorLoader, HfTextGenerator};
pub use http::build_client;
pub use search::DuckDuckGoSearch;
