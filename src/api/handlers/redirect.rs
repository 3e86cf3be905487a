//! Handler for short code resolution.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::api::dto::redirect::{RedirectParams, RedirectResponse};
use crate::error::StoreError;
use crate::state::AppState;

/// Resolves a short code back to its original URL.
///
/// # Endpoint
///
/// `GET /redirect?code=<code>`
///
/// # Responses
///
/// - `200 {"url": "<long url>"}`
/// - `400` plain text `Missing code parameter`
/// - `404` plain text `Short code not found`
/// - `500` plain text `Server error`
///
/// Failure bodies are plain text, not JSON; clients depend on the exact
/// strings.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Query(params): Query<RedirectParams>,
) -> Result<Json<RedirectResponse>, (StatusCode, &'static str)> {
    let code = params.code.unwrap_or_default();

    match state.mapping_service.resolve(&code).await {
        Ok(url) => Ok(Json(RedirectResponse { url })),
        Err(StoreError::MissingInput(_)) => {
            Err((StatusCode::BAD_REQUEST, "Missing code parameter"))
        }
        Err(StoreError::NotFound) => Err((StatusCode::NOT_FOUND, "Short code not found")),
        Err(e) => {
            tracing::error!(error = %e, %code, "failed to resolve short code");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Server error"))
        }
    }
}
