use axum::{extract::State, Json};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::{ApiError, ErrorResponse};
use crate::models::StoredRecipe;
use crate::schema::recipes;
use crate::SharedState;

/// Listing cap for the read endpoint.
const LIST_LIMIT: i64 = 100;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipesResponse {
    pub ok: bool,
    pub recipes: Vec<StoredRecipe>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "Most recently saved recipes, newest first", body = RecipesResponse),
        (status = 500, description = "Storage read failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<SharedState>,
) -> Result<Json<RecipesResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|e| ApiError::Storage(format!("DB connection failed: {e}")))?;

    let rows = recipes::table
        .select(StoredRecipe::as_select())
        .order(recipes::created_at.desc())
        .limit(LIST_LIMIT)
        .load(&mut conn)
        .map_err(|e| ApiError::Storage(format!("DB read error: {e}")))?;

    Ok(Json(RecipesResponse {
        ok: true,
        recipes: rows,
    }))
}
