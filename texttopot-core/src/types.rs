use serde::{Deserialize, Serialize};

/// Fixed tag identifying records produced by this system.
pub const SOURCE_TAG: &str = "texttopot";

/// Maximum number of records extracted from one generation response.
pub const MAX_RECIPES: usize = 3;

/// Title length bound, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Instructions length bound, in characters.
pub const INSTRUCTIONS_MAX_CHARS: usize = 2000;

/// A recipe extracted from generated text, prior to persistence.
///
/// The identity and `source` tag are assigned when the record is accepted
/// by storage; extraction only produces the three text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub title: String,
    /// Comma-separated ingredient list. Falls back to the user's query when
    /// the generated text carries no per-recipe list.
    pub ingredients: String,
    pub instructions: String,
}

/// Truncate to a character count, respecting UTF-8 boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
