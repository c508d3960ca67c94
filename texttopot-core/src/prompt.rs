//! Prompt construction for recipe suggestions.

use crate::query::IngredientQuery;

/// Sampling temperature for suggestion requests.
pub const TEMPERATURE: f32 = 0.7;

/// Completion token cap, enough for three short recipes.
pub const MAX_TOKENS: u32 = 700;

/// An immutable generation request: the rendered prompt plus the fixed
/// model parameters. Built once per inbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Render the suggestion prompt for a validated ingredient query.
///
/// Deterministic and side-effect free. The template asks for exactly three
/// recipes as a JSON array with no surrounding commentary; the extractor
/// still tolerates replies that ignore that instruction.
pub fn suggest_request(query: &IngredientQuery) -> GenerationRequest {
    let prompt = format!(
        "You're an expert in African home cooking. \
         Given these ingredients: {} \
         Provide exactly 3 simple, authentic African recipes. \
         For each recipe return a JSON object with keys: title, ingredients \
         (comma separated list), instructions (concise but complete). \
         Return a JSON array only, no extra commentary.",
        query.as_str()
    );

    GenerationRequest {
        prompt,
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}
