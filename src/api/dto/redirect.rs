//! DTOs for the redirect lookup endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /redirect`.
#[derive(Debug, Deserialize)]
pub struct RedirectParams {
    pub code: Option<String>,
}

/// Successful lookup response with the original URL.
#[derive(Debug, Serialize)]
pub struct RedirectResponse {
    pub url: String,
}
