//! Configuration file loading for early-detect
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EARLY_DETECT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./early-detect.toml` or `./.early-detect.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/early-detect/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ClassifierBackend, ConfigValidationError, FileClassifierConfig, FileConfig,
    FileEncyclopediaConfig, FileEnrichmentConfig, FileGeneratorConfig, FileHttpConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig, FileSearchConfig,
};
pub use loader::ConfigLoader;
