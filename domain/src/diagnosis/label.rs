//! Disease label value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The classifier's output for one feature vector (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiseaseLabel(String);

impl DiseaseLabel {
    /// Create a label, trimming surrounding whitespace.
    pub fn new(label: impl Into<String>) -> Result<Self, DomainError> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyDiseaseLabel);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DiseaseLabel {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DiseaseLabel::new(value)
    }
}

impl From<DiseaseLabel> for String {
    fn from(label: DiseaseLabel) -> Self {
        label.0
    }
}

impl std::fmt::Display for DiseaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_trimmed() {
        let label = DiseaseLabel::new("  Fungal infection \n").unwrap();
        assert_eq!(label.as_str(), "Fungal infection");
    }

    #[test]
    fn test_empty_label_rejected() {
        assert_eq!(DiseaseLabel::new("   "), Err(DomainError::EmptyDiseaseLabel));
        assert!(serde_json::from_str::<DiseaseLabel>("\"\"").is_err());
    }
}
