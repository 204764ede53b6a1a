//! Classifier configuration from TOML (`[classifier]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where predictions come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// Evaluate a JSON model artifact in-process.
    ///
    /// The published model is a scikit-learn pickle; export it to the JSON
    /// artifact format first and point `path` (or `repo`/`filename`) at it.
    Local,
    /// Call the hosted tabular-classification endpoint of the published model
    #[default]
    Remote,
}

/// Raw classifier configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    pub backend: ClassifierBackend,
    /// Model registry base URL (Hugging Face compatible)
    pub registry_url: String,
    /// Model repository on the registry
    pub repo: String,
    /// Revision (branch, tag or commit) to download
    pub revision: String,
    /// Artifact file name inside the repository (local backend)
    pub filename: String,
    /// Local backend: read this exported artifact instead of downloading one
    pub path: Option<PathBuf>,
    /// Inference endpoint for the remote backend
    pub endpoint: String,
    /// Environment variable holding the registry/endpoint token
    pub api_key_env: String,
}

impl Default for FileClassifierConfig {
    fn default() -> Self {
        Self {
            backend: ClassifierBackend::Remote,
            registry_url: "https://huggingface.co".to_string(),
            repo: "AWeirdDev/human-disease-prediction".to_string(),
            revision: "main".to_string(),
            filename: "disease_model.json".to_string(),
            path: None,
            endpoint: "https://api-inference.huggingface.co/models/AWeirdDev/human-disease-prediction"
                .to_string(),
            api_key_env: "HF_TOKEN".to_string(),
        }
    }
}

impl FileClassifierConfig {
    /// Token read from the configured environment variable, if set and non-empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_deserialize() {
        let toml_str = r#"
[classifier]
backend = "remote"
endpoint = "http://localhost:8080/predict"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.classifier.backend, ClassifierBackend::Remote);
        assert_eq!(config.classifier.endpoint, "http://localhost:8080/predict");
        assert_eq!(config.classifier.revision, "main");
    }

    #[test]
    fn test_default_is_hosted_endpoint() {
        let config = FileClassifierConfig::default();
        assert_eq!(config.backend, ClassifierBackend::Remote);
        assert_eq!(
            config.endpoint,
            "https://api-inference.huggingface.co/models/AWeirdDev/human-disease-prediction"
        );
        assert!(config.path.is_none());
    }

    #[test]
    fn test_local_path_override() {
        let toml_str = r#"
[classifier]
backend = "local"
path = "models/disease_model.json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.classifier.backend, ClassifierBackend::Local);
        assert_eq!(
            config.classifier.path,
            Some(PathBuf::from("models/disease_model.json"))
        );
    }
}
