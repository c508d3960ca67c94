pub mod extract;
pub mod llm;
pub mod prompt;
pub mod query;
pub mod types;

pub use extract::extract_recipes;
pub use llm::{create_provider, FakeProvider, LlmError, LlmProvider, OpenAiProvider};
pub use prompt::{suggest_request, GenerationRequest};
pub use query::{IngredientQuery, ValidationError, MAX_QUERY_CHARS};
pub use types::{truncate_chars, RecipeRecord, MAX_RECIPES, SOURCE_TAG};
