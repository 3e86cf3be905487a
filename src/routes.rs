//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST   /shorten`        - Create (or reuse) a short code for a URL
//! - `GET    /redirect?code=` - Resolve a short code to its URL
//! - `DELETE /delete/{code}`  - Remove a mapping
//! - `GET    /health`         - Liveness probe (stateless)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{delete_handler, health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/redirect", get(redirect_handler))
        .route("/delete/{code}", delete(delete_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
