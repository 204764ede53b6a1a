//! Diagnosis parameters: knobs for a pipeline run.
//!
//! [`DiagnosisParams`] groups the static parameters used by
//! [`RunDiagnosisUseCase`](crate::use_cases::run_diagnosis::RunDiagnosisUseCase)
//! and the enrichers. These are application-layer concerns, not domain policy.

use crate::ports::encyclopedia::DEFAULT_SUMMARY_SENTENCES;
use early_detect_domain::{DEFAULT_MAX_RESULTS, EnrichmentMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisParams {
    /// Maximum number of hospital results kept in a report.
    pub max_hospital_results: usize,
    /// Sentences requested from the encyclopedia summary.
    pub summary_sentences: usize,
    /// Which enrichment variant runs after classification.
    pub enrichment_mode: EnrichmentMode,
}

impl Default for DiagnosisParams {
    fn default() -> Self {
        Self {
            max_hospital_results: DEFAULT_MAX_RESULTS,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            enrichment_mode: EnrichmentMode::default(),
        }
    }
}

impl DiagnosisParams {
    // ==================== Builder Methods ====================

    pub fn with_max_hospital_results(mut self, max: usize) -> Self {
        self.max_hospital_results = max;
        self
    }

    pub fn with_summary_sentences(mut self, sentences: usize) -> Self {
        self.summary_sentences = sentences;
        self
    }

    pub fn with_enrichment_mode(mut self, mode: EnrichmentMode) -> Self {
        self.enrichment_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = DiagnosisParams::default();
        assert_eq!(params.max_hospital_results, 5);
        assert_eq!(params.summary_sentences, 4);
        assert_eq!(params.enrichment_mode, EnrichmentMode::Encyclopedia);
    }

    #[test]
    fn test_builders() {
        let params = DiagnosisParams::default()
            .with_max_hospital_results(3)
            .with_summary_sentences(2)
            .with_enrichment_mode(EnrichmentMode::Narrative);
        assert_eq!(params.max_hospital_results, 3);
        assert_eq!(params.summary_sentences, 2);
        assert_eq!(params.enrichment_mode, EnrichmentMode::Narrative);
    }
}
