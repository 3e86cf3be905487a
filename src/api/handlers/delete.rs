//! Handler for mapping deletion.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::api::dto::delete::DeleteResponse;
use crate::error::StoreError;
use crate::state::AppState;

/// Permanently deletes the mapping for a short code.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// # Responses
///
/// - `200 {"message": "URL deleted successfully"}`
/// - `400 {"error": "Missing code"}` (an empty path segment normally never
///   matches the route, so in practice the router answers first)
/// - `404 {"error": "URL not found"}` when nothing was removed; a repeated
///   delete of the same code lands here
/// - `500 {"error": "Internal server error"}` on storage failure
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DeleteResponse>, (StatusCode, Json<Value>)> {
    match state.mapping_service.delete(&code).await {
        Ok(()) => Ok(Json(DeleteResponse {
            message: "URL deleted successfully",
        })),
        Err(StoreError::MissingInput(_)) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing code" })),
        )),
        Err(StoreError::NotFound) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "URL not found" })),
        )),
        Err(e) => {
            tracing::error!(error = %e, %code, "failed to delete mapping");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            ))
        }
    }
}
