//! Presentation layer for early-detect
//!
//! This crate contains CLI definitions, the interactive intake form,
//! report formatters and progress reporters.

pub mod cli;
pub mod config;
pub mod intake;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, EnrichmentArg, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use intake::{DiagnosisRepl, IntakeForm};
pub use output::console::ReportFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
