//! CLI command definitions

use clap::{Parser, ValueEnum};
use early_detect_domain::{Age, EnrichmentMode, Gender};
use std::path::PathBuf;

/// Output format for diagnosis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Patient summary, prediction, enrichment and hospitals
    Full,
    /// Prediction and enrichment only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for early_detect_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Enrichment variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnrichmentArg {
    /// Encyclopedia summary
    Encyclopedia,
    /// Generated definition, treatment and urgency
    Narrative,
}

impl From<EnrichmentArg> for EnrichmentMode {
    fn from(arg: EnrichmentArg) -> Self {
        match arg {
            EnrichmentArg::Encyclopedia => EnrichmentMode::Encyclopedia,
            EnrichmentArg::Narrative => EnrichmentMode::Narrative,
        }
    }
}

fn parse_age(s: &str) -> Result<Age, String> {
    s.parse::<Age>().map_err(|e| e.to_string())
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    s.parse::<Gender>().map_err(|e| e.to_string())
}

/// CLI arguments for early-detect
#[derive(Parser, Debug)]
#[command(name = "early-detect")]
#[command(author, version, about = "Predict a likely disease from a symptom checklist")]
#[command(long_about = r#"
early-detect predicts a likely disease from a checklist of symptoms, then adds
a short description of the disease and a list of nearby hospitals.

The pipeline:
1. Classify: the selected symptoms are sent to a pre-trained classifier
2. Enrich: an encyclopedia summary (or a generated narrative) for the prediction
3. Locate: a web search for hospitals near --location (skipped when blank)

This tool is not a medical device. Always consult a doctor.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./early-detect.toml Project-level config
3. ~/.config/early-detect/config.toml   Global config

Example:
  early-detect --symptom itching --symptom "skin rash" --location Boston
  early-detect --age 40 --gender female -s chills -s high_fever -o json
  early-detect --interactive
  early-detect --list-symptoms
"#)]
pub struct Cli {
    /// Patient age in years (0-100)
    #[arg(long, value_parser = parse_age, default_value = "25")]
    pub age: Age,

    /// Patient gender (male or female)
    #[arg(long, value_parser = parse_gender, default_value = "male")]
    pub gender: Gender,

    /// Symptom to select, by identifier or label (can be specified multiple times)
    #[arg(short, long = "symptom", value_name = "SYMPTOM")]
    pub symptoms: Vec<String>,

    /// Location for the hospital search; omit to skip it
    #[arg(short, long, value_name = "TEXT")]
    pub location: Option<String>,

    /// Fill in the intake form interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the symptom checklist and exit
    #[arg(long)]
    pub list_symptoms: bool,

    /// Enrichment variant (overrides config)
    #[arg(short, long, value_enum)]
    pub enrichment: Option<EnrichmentArg>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
