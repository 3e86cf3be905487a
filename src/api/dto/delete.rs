//! DTOs for the delete endpoint.

use serde::Serialize;

/// Successful deletion response.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}
