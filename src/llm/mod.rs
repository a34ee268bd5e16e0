//! Hosted language model access

pub mod gemini;

use crate::error::ModelError;
use async_trait::async_trait;

pub use gemini::GeminiClient;

/// A text-in, text-out language model
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send a single prompt and return the raw text of the reply
    ///
    /// An empty string means the model produced no text.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
