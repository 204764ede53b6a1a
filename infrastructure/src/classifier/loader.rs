//! Builds the configured classifier backend on first use

use super::local::LocalClassifier;
use super::registry::ModelRegistry;
use super::remote::RemoteClassifier;
use crate::config::{ClassifierBackend, FileClassifierConfig};
use async_trait::async_trait;
use early_detect_application::{DiseaseClassifier, LoadError, ServiceLoader};
use early_detect_domain::SymptomCatalog;
use std::sync::Arc;
use tracing::info;

const SERVICE: &str = "disease classifier";

pub struct ClassifierLoader {
    config: FileClassifierConfig,
    client: reqwest::Client,
    catalog: &'static SymptomCatalog,
}

impl ClassifierLoader {
    pub fn new(
        config: FileClassifierConfig,
        client: reqwest::Client,
        catalog: &'static SymptomCatalog,
    ) -> Self {
        Self {
            config,
            client,
            catalog,
        }
    }

    async fn artifact_json(&self) -> Result<String, LoadError> {
        if let Some(path) = &self.config.path {
            info!("Reading model artifact from {}", path.display());
            return tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::new(SERVICE, format!("{}: {}", path.display(), e)));
        }

        ModelRegistry::new(self.client.clone(), &self.config.registry_url)
            .with_api_key(self.config.api_key())
            .fetch(&self.config.repo, &self.config.revision, &self.config.filename)
            .await
            .map_err(|e| LoadError::new(SERVICE, e.to_string()))
    }
}

#[async_trait]
impl ServiceLoader<dyn DiseaseClassifier> for ClassifierLoader {
    fn describe(&self) -> String {
        match self.config.backend {
            ClassifierBackend::Local => match &self.config.path {
                Some(path) => format!("{} from {}", SERVICE, path.display()),
                None => format!(
                    "{} {}@{}",
                    SERVICE, self.config.repo, self.config.revision
                ),
            },
            ClassifierBackend::Remote => format!("{} at {}", SERVICE, self.config.endpoint),
        }
    }

    async fn load(&self) -> Result<Arc<dyn DiseaseClassifier>, LoadError> {
        match self.config.backend {
            ClassifierBackend::Local => {
                let json = self.artifact_json().await?;
                let classifier = LocalClassifier::from_json(&json)
                    .map_err(|e| LoadError::new(SERVICE, e.to_string()))?;
                info!(
                    "Loaded model with {} features and {} classes",
                    classifier.schema().features.len(),
                    classifier.class_count()
                );
                Ok(Arc::new(classifier))
            }
            ClassifierBackend::Remote => Ok(Arc::new(RemoteClassifier::new(
                self.client.clone(),
                &self.config.endpoint,
                self.config.api_key(),
                self.catalog.descriptor(),
            ))),
        }
    }
}
