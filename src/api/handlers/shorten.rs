//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::StoreError;
use crate::state::AppState;

/// Creates a short code for a long URL, reusing an existing mapping if the
/// same URL was shortened before.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Responses
///
/// - `200 {"shortUrl": "<6 hex chars>"}`
/// - `400 {"error": "Missing URL"}` when the `url` field is absent or empty
/// - `500 {"error": "Could not shorten URL"}` on storage failure or when no
///   unique code could be allocated; detail is logged, never returned
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, (StatusCode, Json<Value>)> {
    let url = payload.url.unwrap_or_default();

    match state.mapping_service.shorten(&url).await {
        Ok(code) => Ok(Json(ShortenResponse { short_url: code })),
        Err(StoreError::MissingInput(_)) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing URL" })),
        )),
        Err(e) => {
            tracing::error!(error = %e, "failed to shorten URL");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Could not shorten URL" })),
            ))
        }
    }
}
