//! Text generator port
//!
//! Prompt-in/text-out access to a generative language model. Output is
//! sampled, so repeated calls with the same prompt may return different text.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during text generation
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier used for generation
    fn model(&self) -> &str;

    /// Generate a completion for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
