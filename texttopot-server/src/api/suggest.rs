use axum::{extract::State, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use texttopot_core::{
    extract_recipes, suggest_request, truncate_chars, IngredientQuery, RecipeRecord, SOURCE_TAG,
};
use utoipa::ToSchema;

use crate::api::{ApiError, ErrorResponse};
use crate::db::DbPool;
use crate::models::NewRecipe;
use crate::schema::recipes;
use crate::{audit, SharedState};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SuggestRequest {
    /// Free-text ingredient list, e.g. "chicken, tomatoes".
    #[serde(default)]
    pub ingredients: Option<String>,
}

/// A recipe record with its assigned identity, echoed back after saving.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SavedRecipe {
    pub id: i64,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestResponse {
    pub ok: bool,
    pub saved: Vec<SavedRecipe>,
}

#[utoipa::path(
    post,
    path = "/api/suggest",
    tag = "recipes",
    request_body = SuggestRequest,
    responses(
        (status = 200, description = "Recipes generated and saved", body = SuggestResponse),
        (status = 400, description = "Missing or over-length ingredients", body = ErrorResponse),
        (status = 500, description = "Generation or storage failure", body = ErrorResponse)
    )
)]
pub async fn suggest(
    State(state): State<SharedState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let query = IngredientQuery::parse(request.ingredients.as_deref())?;

    let generation = suggest_request(&query);
    let raw = state.llm.complete(&generation).await?;

    // Best-effort; an audit failure never fails the request.
    let _ = audit::record(
        &state.pool,
        audit::SUGGEST_GENERATION,
        json!({
            "ingredients": query.as_str(),
            "generation_raw": truncate_chars(&raw, 2000),
        }),
    );

    let records = extract_recipes(&raw, &query);
    let saved = save_batch(&state.pool, &records)?;

    Ok(Json(SuggestResponse { ok: true, saved }))
}

/// Insert the extracted batch, assigning sequential ids in extraction
/// order. The batch is one transaction: a failure on any record leaves
/// nothing from this request persisted.
fn save_batch(pool: &DbPool, records: &[RecipeRecord]) -> Result<Vec<SavedRecipe>, ApiError> {
    let mut conn = pool
        .get()
        .map_err(|e| ApiError::Storage(format!("DB connection failed: {e}")))?;

    let result: Result<Vec<SavedRecipe>, diesel::result::Error> = conn.transaction(|conn| {
        let mut saved = Vec::with_capacity(records.len());

        for record in records {
            let row = NewRecipe {
                title: &record.title,
                ingredients: &record.ingredients,
                instructions: &record.instructions,
                source: SOURCE_TAG,
            };

            let id: i64 = diesel::insert_into(recipes::table)
                .values(&row)
                .returning(recipes::id)
                .get_result(conn)?;

            saved.push(SavedRecipe {
                id,
                title: record.title.clone(),
                ingredients: record.ingredients.clone(),
                instructions: record.instructions.clone(),
                source: SOURCE_TAG.to_string(),
            });
        }

        Ok(saved)
    });

    result.map_err(|e| ApiError::Storage(format!("DB save error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_field_present() {
        let request: SuggestRequest =
            serde_json::from_str(r#"{"ingredients": "chicken, tomatoes"}"#).unwrap();
        assert_eq!(request.ingredients.as_deref(), Some("chicken, tomatoes"));
    }

    #[test]
    fn test_request_field_absent_defaults_to_none() {
        let request: SuggestRequest = serde_json::from_str("{}").unwrap();
        assert!(request.ingredients.is_none());
    }

    #[test]
    fn test_request_field_null_defaults_to_none() {
        let request: SuggestRequest = serde_json::from_str(r#"{"ingredients": null}"#).unwrap();
        assert!(request.ingredients.is_none());
    }

    #[test]
    fn test_saved_recipe_serializes_with_identity_and_source() {
        let saved = SavedRecipe {
            id: 7,
            title: "Jollof Rice".to_string(),
            ingredients: "rice, tomatoes".to_string(),
            instructions: "Cook.".to_string(),
            source: SOURCE_TAG.to_string(),
        };

        let value = serde_json::to_value(&saved).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["source"], "texttopot");
    }
}
