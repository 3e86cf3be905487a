//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::StoreError;
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for mapping storage and retrieval.
///
/// Holds a shared connection pool created once at startup. Queries are
/// runtime-bound prepared statements.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO mappings (code, long_url)
            VALUES ($1, $2)
            RETURNING id, code, long_url, created_at
            "#,
        )
        .bind(&new_mapping.code)
        .bind(&new_mapping.long_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                StoreError::CodeTaken
            } else {
                StoreError::Storage(e)
            }
        })?;

        Ok(mapping)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, code, long_url, created_at
            FROM mappings
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, StoreError> {
        // Duplicate rows for the same URL are possible under write races;
        // the oldest row wins so repeated shortens stay stable.
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, code, long_url, created_at
            FROM mappings
            WHERE long_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn delete_by_code(&self, code: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM mappings WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
