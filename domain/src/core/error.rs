//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("Invalid age: {0}")]
    InvalidAge(String),

    #[error("Age {0} is outside the supported range 0-100")]
    AgeOutOfRange(i64),

    #[error("Invalid gender: {0} (expected male or female)")]
    InvalidGender(String),

    #[error("Disease label cannot be empty")]
    EmptyDiseaseLabel,

    #[error("Symptom schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Invalid enrichment mode: {0} (expected encyclopedia or narrative)")]
    InvalidEnrichmentMode(String),
}

impl DomainError {
    /// Whether the error comes from user-supplied input rather than a model or schema.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownSymptom(_)
                | DomainError::InvalidAge(_)
                | DomainError::AgeOutOfRange(_)
                | DomainError::InvalidGender(_)
                | DomainError::InvalidEnrichmentMode(_)
        )
    }
}
