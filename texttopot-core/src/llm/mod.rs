//! LLM provider abstraction for recipe generation.
//!
//! This module provides a trait-based abstraction over text-generation
//! providers, with a fake implementation for testing.

mod fake;
mod openai;

pub use fake::FakeProvider;
pub use openai::OpenAiProvider;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::prompt::GenerationRequest;

/// Error type for generation calls. Nothing raises past this boundary;
/// transport failures, non-success statuses, and malformed response shapes
/// all land here.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for text-generation providers.
///
/// Implementations should be stateless and thread-safe. The provider sends
/// the rendered prompt with its fixed model parameters and returns the raw
/// generated text.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a generation request and get the raw text response.
    async fn complete(&self, request: &GenerationRequest) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Build a provider by name.
///
/// Configuration is passed in explicitly; this module never reads the
/// environment itself. `api_key` is only required for the "openai"
/// provider.
pub fn create_provider(
    name: &str,
    api_key: Option<&str>,
    model: &str,
    base_url: &str,
) -> Result<Box<dyn LlmProvider>, LlmError> {
    match name {
        "fake" => Ok(Box::new(FakeProvider::default())),
        "openai" => {
            let api_key = api_key
                .ok_or_else(|| LlmError::NotConfigured("OPENAI_API_KEY not set".to_string()))?;
            Ok(Box::new(OpenAiProvider::new(
                api_key.to_string(),
                model.to_string(),
                base_url.to_string(),
            )))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
