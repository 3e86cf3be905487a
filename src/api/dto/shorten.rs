//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// `url` is optional at the serde level so an absent field reaches the
/// handler as `None` and maps to the fixed `Missing URL` response instead of
/// a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

/// Successful shorten response carrying the allocated (or reused) code.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}
