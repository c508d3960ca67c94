pub mod recipes;
pub mod suggest;

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use texttopot_core::{LlmError, ValidationError};
use thiserror::Error;
use utoipa::{OpenApi, ToSchema};

use crate::SharedState;

/// Shared error response shape used by all endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

/// Error taxonomy for the API. Validation failures short-circuit before any
/// external call; generation failures before extraction or persistence;
/// storage failures abort the save step.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("generation request failed: {0}")]
    Generation(#[from] LlmError),

    #[error("{0}")]
    Storage(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) | ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (
            status,
            Json(ErrorResponse {
                ok: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Returns the application router: the two API endpoints plus the index
/// page and its script.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/static/js/app.js", get(app_js))
        .route("/api/suggest", post(suggest::suggest))
        .route("/api/recipes", get(recipes::list_recipes))
}

/// The single index page, embedded at compile time.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../../static/js/app.js"),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(suggest::suggest, recipes::list_recipes),
    components(schemas(
        ErrorResponse,
        suggest::SuggestRequest,
        suggest::SuggestResponse,
        suggest::SavedRecipe,
        recipes::RecipesResponse,
        crate::models::StoredRecipe,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_400() {
        let response = ApiError::Validation(ValidationError::Empty).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generation_errors_map_to_500() {
        let error = ApiError::Generation(LlmError::RequestFailed("timed out".to_string()));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_errors_map_to_500() {
        let error = ApiError::Storage("DB save error: connection reset".to_string());
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_messages_pass_through_unchanged() {
        assert_eq!(
            ApiError::Validation(ValidationError::Empty).to_string(),
            "No ingredients provided."
        );
        assert_eq!(
            ApiError::Validation(ValidationError::TooLong).to_string(),
            "Ingredients text too long."
        );
    }

    #[test]
    fn test_generation_message_names_the_stage() {
        let error = ApiError::Generation(LlmError::RequestFailed("timed out".to_string()));
        assert_eq!(
            error.to_string(),
            "generation request failed: API request failed: timed out"
        );
    }
}
