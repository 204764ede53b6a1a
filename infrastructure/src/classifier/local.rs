//! In-process classifier backed by a [`ModelArtifact`]

use super::artifact::{ArtifactError, ModelArtifact};
use async_trait::async_trait;
use early_detect_application::{ClassifierError, DiseaseClassifier, ensure_shape};
use early_detect_domain::{DiseaseLabel, FeatureVector, SchemaDescriptor};

/// Evaluates a decoded model artifact locally
pub struct LocalClassifier {
    artifact: ModelArtifact,
    schema: SchemaDescriptor,
}

impl LocalClassifier {
    pub fn new(artifact: ModelArtifact) -> Self {
        let schema = artifact.schema();
        Self { artifact, schema }
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        ModelArtifact::from_json(json).map(Self::new)
    }

    pub fn class_count(&self) -> usize {
        self.artifact.classes.len()
    }
}

#[async_trait]
impl DiseaseClassifier for LocalClassifier {
    fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    async fn predict(&self, vector: &FeatureVector) -> Result<DiseaseLabel, ClassifierError> {
        ensure_shape(&self.schema, vector)?;

        let label = self.artifact.predict(&vector.as_f64()).map_err(|e| match e {
            ArtifactError::FeatureCount { .. } => ClassifierError::Shape(e.to_string()),
            other => ClassifierError::InvalidOutput(other.to_string()),
        })?;

        DiseaseLabel::new(label).map_err(|e| ClassifierError::InvalidOutput(e.to_string()))
    }
}
