//! Fake LLM provider for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{LlmError, LlmProvider};
use crate::prompt::GenerationRequest;

/// A fake provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns the default response or an
/// error.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("[]".to_string()),
        }
    }
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeProvider that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a FakeProvider answering every prompt with a well-formed
    /// three-recipe JSON array, the shape the suggestion prompt asks for.
    pub fn with_suggestions() -> Self {
        Self::new().with_default_response(
            r#"[
                {"title": "Jollof Rice", "ingredients": "rice, tomatoes, onions, pepper", "instructions": "Blend tomatoes and pepper, fry with onions, add rice and stock, cook until tender."},
                {"title": "Egusi Soup", "ingredients": "melon seeds, spinach, palm oil", "instructions": "Blend melon seeds, fry in palm oil, add stock and greens, simmer."},
                {"title": "Chicken Yassa", "ingredients": "chicken, onions, lemon, mustard", "instructions": "Marinate chicken in lemon and mustard, grill, then braise with onions."}
            ]"#,
        )
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = request.prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                &request.prompt[..request.prompt.len().min(100)]
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
