//! Disease classifier port
//!
//! Defines the interface to the pre-trained model that maps a feature vector
//! to a disease label.

use async_trait::async_trait;
use early_detect_domain::{DiseaseLabel, FeatureVector, SchemaDescriptor};
use thiserror::Error;

/// Errors that can occur during classification
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Feature vector shape mismatch: {0}")]
    Shape(String),

    #[error("Inference request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid model output: {0}")]
    InvalidOutput(String),
}

/// A loaded, ready-to-use classifier
///
/// Implementations (adapters) live in the infrastructure layer. Instances are
/// read-only after construction and shared across requests.
#[async_trait]
pub trait DiseaseClassifier: Send + Sync {
    /// Input schema the model was trained on
    fn schema(&self) -> &SchemaDescriptor;

    /// Predict a disease label for one row of features
    async fn predict(&self, vector: &FeatureVector) -> Result<DiseaseLabel, ClassifierError>;
}

/// Reject vectors whose length or schema id disagree with `schema`.
///
/// Adapters call this before inference so a mismatched vector fails loudly
/// instead of producing a prediction for the wrong columns.
pub fn ensure_shape(schema: &SchemaDescriptor, vector: &FeatureVector) -> Result<(), ClassifierError> {
    if vector.len() != schema.features.len() {
        return Err(ClassifierError::Shape(format!(
            "model expects 1 x {} features, got 1 x {}",
            schema.features.len(),
            vector.len()
        )));
    }
    if !schema.id.is_empty() && vector.schema_id() != schema.id {
        return Err(ClassifierError::Shape(format!(
            "vector built for schema '{}' but model uses '{}'",
            vector.schema_id(),
            schema.id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(n: usize) -> SchemaDescriptor {
        SchemaDescriptor::new("test/v1", (0..n).map(|i| format!("f{}", i)).collect())
    }

    #[test]
    fn test_ensure_shape_accepts_matching_vector() {
        let vector = FeatureVector::from_values("test/v1", vec![0, 1, 0]);
        assert!(ensure_shape(&schema(3), &vector).is_ok());
    }

    #[test]
    fn test_ensure_shape_rejects_wrong_length() {
        let vector = FeatureVector::from_values("test/v1", vec![0, 1]);
        let err = ensure_shape(&schema(3), &vector).unwrap_err();
        assert!(matches!(err, ClassifierError::Shape(ref m) if m.contains("1 x 3")));
    }

    #[test]
    fn test_ensure_shape_rejects_other_schema() {
        let vector = FeatureVector::from_values("other/v9", vec![0, 1, 0]);
        assert!(ensure_shape(&schema(3), &vector).is_err());

        let anonymous = SchemaDescriptor::new("", schema(3).features);
        assert!(ensure_shape(&anonymous, &vector).is_ok());
    }
}
