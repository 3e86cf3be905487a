//! Handler for the health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Returns a constant liveness response.
///
/// # Endpoint
///
/// `GET /health`
///
/// Stateless by contract: no store or database interaction, always
/// `200 {"status": "ok"}`.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
