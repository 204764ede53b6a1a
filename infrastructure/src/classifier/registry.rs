//! Model artifact download and on-disk cache

use crate::http::body_excerpt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Download failed: {0}")]
    Request(String),

    #[error("Registry returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A Hugging Face style model registry
///
/// Artifacts are fetched from `{registry}/{repo}/resolve/{revision}/{file}` and
/// stored at `{cache_root}/{repo}/{revision}/{file}`. A cached copy is always
/// preferred over the network.
pub struct ModelRegistry {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    cache_root: Option<PathBuf>,
}

impl ModelRegistry {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: None,
            cache_root: default_cache_root(),
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Override the cache directory; `None` disables caching.
    pub fn with_cache_root(mut self, root: Option<PathBuf>) -> Self {
        self.cache_root = root;
        self
    }

    pub fn artifact_url(&self, repo: &str, revision: &str, filename: &str) -> String {
        format!(
            "{}/{}/resolve/{}/{}",
            self.base_url.trim_end_matches('/'),
            repo.trim_matches('/'),
            revision,
            filename
        )
    }

    pub fn cache_path(&self, repo: &str, revision: &str, filename: &str) -> Option<PathBuf> {
        self.cache_root.as_ref().map(|root| {
            let mut path = root.clone();
            for part in repo.split('/').filter(|p| !p.is_empty()) {
                path.push(part);
            }
            path.push(revision);
            path.push(filename);
            path
        })
    }

    /// Return the artifact contents, downloading it on a cache miss.
    pub async fn fetch(
        &self,
        repo: &str,
        revision: &str,
        filename: &str,
    ) -> Result<String, RegistryError> {
        let cache_path = self.cache_path(repo, revision, filename);

        if let Some(path) = &cache_path {
            match tokio::fs::read_to_string(path).await {
                Ok(contents) => {
                    debug!("Using cached artifact {}", path.display());
                    return Ok(contents);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }

        let url = self.artifact_url(repo, revision, filename);
        info!("Downloading model artifact from {}", url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request
            .send()
            .await
            .map_err(|e| RegistryError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RegistryError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(RegistryError::Status {
                status: status.as_u16(),
                body: body_excerpt(&body),
            });
        }

        if let Some(path) = &cache_path {
            write_atomic(path, &body).await?;
            debug!("Cached artifact at {}", path.display());
        }
        Ok(body)
    }
}

fn default_cache_root() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("early-detect").join("models"))
}

/// Write via a sibling temp file so a partial download never looks cached.
async fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let tmp = path.with_extension("part");
    tokio::fs::write(&tmp, contents).await?;
    tokio::fs::rename(&tmp, path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry(root: Option<PathBuf>) -> ModelRegistry {
        ModelRegistry::new(reqwest::Client::new(), "https://huggingface.co/").with_cache_root(root)
    }

    #[test]
    fn test_artifact_url() {
        let r = registry(None);
        assert_eq!(
            r.artifact_url("owner/model", "main", "model.json"),
            "https://huggingface.co/owner/model/resolve/main/model.json"
        );
    }

    #[test]
    fn test_cache_path_layout() {
        let r = registry(Some(PathBuf::from("/cache")));
        assert_eq!(
            r.cache_path("owner/model", "v2", "model.json").unwrap(),
            PathBuf::from("/cache/owner/model/v2/model.json")
        );
        assert!(registry(None).cache_path("a", "b", "c").is_none());
    }

    #[tokio::test]
    async fn test_fetch_prefers_cache() {
        let dir = TempDir::new().unwrap();
        // Unroutable registry: a network attempt would fail.
        let r = ModelRegistry::new(reqwest::Client::new(), "http://127.0.0.1:9")
            .with_cache_root(Some(dir.path().to_path_buf()));
        let path = r.cache_path("owner/model", "main", "m.json").unwrap();
        write_atomic(&path, "{\"cached\": true}").await.unwrap();

        let contents = r.fetch("owner/model", "main", "m.json").await.unwrap();
        assert_eq!(contents, "{\"cached\": true}");
        assert!(!path.with_extension("part").exists());
    }

    #[tokio::test]
    async fn test_fetch_miss_reports_request_error() {
        let dir = TempDir::new().unwrap();
        let r = ModelRegistry::new(reqwest::Client::new(), "http://127.0.0.1:9")
            .with_cache_root(Some(dir.path().to_path_buf()));
        let err = r.fetch("owner/model", "main", "m.json").await.unwrap_err();
        assert!(matches!(err, RegistryError::Request(_)));
    }
}
