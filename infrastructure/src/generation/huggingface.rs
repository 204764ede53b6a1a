//! Text generation over a Hugging Face style inference API
//!
//! `POST {base_url}/models/{model}` with
//! `{"inputs": prompt, "parameters": {...}}`, answered by
//! `[{"generated_text": "..."}]`.

use crate::config::FileGeneratorConfig;
use crate::http::body_excerpt;
use async_trait::async_trait;
use early_detect_application::{GenerationError, LoadError, ServiceLoader, TextGenerator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerationParameters {
    do_sample: bool,
    temperature: f32,
    top_p: f32,
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParameters,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
    Error { error: String },
}

/// Extract the generated text from a response body.
pub(crate) fn parse_generation(body: &str) -> Result<String, GenerationError> {
    let response: GenerationResponse = serde_json::from_str(body).map_err(|_| {
        GenerationError::InvalidResponse(format!("unexpected body: {}", body_excerpt(body)))
    })?;
    match response {
        GenerationResponse::Batch(items) => items
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| GenerationError::InvalidResponse("empty generation list".into())),
        GenerationResponse::Single(g) => Ok(g.generated_text),
        GenerationResponse::Error { error } => Err(GenerationError::RequestFailed(error)),
    }
}

pub struct HfTextGenerator {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    parameters: GenerationParameters,
}

impl HfTextGenerator {
    pub fn new(client: reqwest::Client, config: &FileGeneratorConfig) -> Self {
        Self {
            client,
            url: format!(
                "{}/models/{}",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            model: config.model.clone(),
            api_key: config.api_key(),
            parameters: GenerationParameters {
                do_sample: true,
                temperature: config.temperature,
                top_p: config.top_p,
                max_new_tokens: config.max_new_tokens,
                return_full_text: false,
            },
        }
    }
}

#[async_trait]
impl TextGenerator for HfTextGenerator {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut request = self.client.post(&self.url).json(&GenerationRequest {
            inputs: prompt,
            parameters: &self.parameters,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!("POST {}", self.url);
        let response = request
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        match status.as_u16() {
            200..=299 => parse_generation(&body),
            404 => Err(GenerationError::ModelNotAvailable(self.model.clone())),
            503 => Err(GenerationError::ModelNotAvailable(format!(
                "{} is loading: {}",
                self.model,
                body_excerpt(&body)
            ))),
            code => Err(GenerationError::RequestFailed(format!(
                "HTTP {}: {}",
                code,
                body_excerpt(&body)
            ))),
        }
    }
}

/// Builds the text generator for a `LazyHandle`
pub struct GeneratorLoader {
    config: FileGeneratorConfig,
    client: reqwest::Client,
}

impl GeneratorLoader {
    pub fn new(config: FileGeneratorConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl ServiceLoader<dyn TextGenerator> for GeneratorLoader {
    fn describe(&self) -> String {
        format!("text generator {}", self.config.model)
    }

    async fn load(&self) -> Result<Arc<dyn TextGenerator>, LoadError> {
        if self.config.model.trim().is_empty() {
            return Err(LoadError::new("text generator", "no model configured"));
        }
        info!("Using text generation model {}", self.config.model);
        Ok(Arc::new(HfTextGenerator::new(self.client.clone(), &self.config)))
    }
}
