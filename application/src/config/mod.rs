//! Application-level configuration.
//!
//! - [`DiagnosisParams`]: result limits, summary length and enrichment mode

pub mod diagnosis_params;

pub use diagnosis_params::DiagnosisParams;
