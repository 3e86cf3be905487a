//! Mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// A live mapping between a short code and a long URL.
///
/// The surrogate `id` reflects insertion order and carries no semantic
/// meaning. Mappings are immutable once created; the only lifecycle
/// transition after creation is permanent deletion.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Mapping {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub code: String,
    pub long_url: String,
}
