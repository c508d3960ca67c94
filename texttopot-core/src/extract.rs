//! Tolerant extraction of recipe records from generated text.
//!
//! Model output is unstructured: sometimes a clean JSON array, sometimes
//! prose with commentary around it. Extraction tries a structured slice
//! first and falls back to a paragraph heuristic. It never fails; a reply
//! with nothing usable degrades to an empty list.

use serde_json::Value;

use crate::query::IngredientQuery;
use crate::types::{
    truncate_chars, RecipeRecord, INSTRUCTIONS_MAX_CHARS, MAX_RECIPES, TITLE_MAX_CHARS,
};

/// Extract at most three recipe records from raw generated text.
///
/// Tier 1 slices the first `[` through the last `]` and parses the
/// substring as a JSON array; tier 2 splits the text on blank lines.
/// Whichever tier yields a non-empty candidate list wins. Malformed JSON
/// is not an error, it just falls through to tier 2.
pub fn extract_recipes(raw: &str, query: &IngredientQuery) -> Vec<RecipeRecord> {
    if let Some(candidates) = json_array_slice(raw) {
        if !candidates.is_empty() {
            return candidates
                .into_iter()
                .take(MAX_RECIPES)
                .map(|candidate| normalize_candidate(candidate, query))
                .collect();
        }
    }

    paragraph_blocks(raw, query)
}

/// Tier 1: locate the outermost bracket pair and parse it as a JSON array.
///
/// Returns None when no pair exists, the first `[` does not precede the
/// last `]`, or the slice is not valid JSON of array type.
fn json_array_slice(raw: &str) -> Option<Vec<Value>> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if start >= end {
        return None;
    }

    match serde_json::from_str(&raw[start..=end]) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// Normalization for one tier-1 candidate. Objects are read field by field
/// with explicit defaults for the absent-or-wrong-type case: title and
/// instructions default to empty, ingredients to the original query.
/// Anything that is not an object contributes only its string form as a
/// title.
fn normalize_candidate(candidate: Value, query: &IngredientQuery) -> RecipeRecord {
    match candidate {
        Value::Object(fields) => {
            let title = fields
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let ingredients = fields
                .get("ingredients")
                .and_then(Value::as_str)
                .unwrap_or_else(|| query.as_str());
            let instructions = fields
                .get("instructions")
                .and_then(Value::as_str)
                .unwrap_or_default();

            RecipeRecord {
                title: truncate_chars(title, TITLE_MAX_CHARS),
                ingredients: ingredients.to_string(),
                instructions: truncate_chars(instructions, INSTRUCTIONS_MAX_CHARS),
            }
        }
        Value::String(text) => RecipeRecord {
            title: truncate_chars(&text, TITLE_MAX_CHARS),
            ingredients: query.as_str().to_string(),
            instructions: String::new(),
        },
        other => RecipeRecord {
            title: truncate_chars(&other.to_string(), TITLE_MAX_CHARS),
            ingredients: query.as_str().to_string(),
            instructions: String::new(),
        },
    }
}

/// Tier 2: treat each blank-line-separated paragraph as one record.
///
/// The first non-empty line is the title, the remaining lines join into the
/// instructions, and ingredients carry the original query verbatim. Tier 2
/// never tries to pull a per-recipe ingredient list out of the text.
fn paragraph_blocks(raw: &str, query: &IngredientQuery) -> Vec<RecipeRecord> {
    let mut records = Vec::new();

    for block in raw.split("\n\n") {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some((title, rest)) = lines.split_first() else {
            continue;
        };

        records.push(RecipeRecord {
            title: truncate_chars(title, TITLE_MAX_CHARS),
            ingredients: query.as_str().to_string(),
            instructions: truncate_chars(&rest.join(" "), INSTRUCTIONS_MAX_CHARS),
        });

        if records.len() == MAX_RECIPES {
            break;
        }
    }

    records
}
