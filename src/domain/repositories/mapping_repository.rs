//! Repository trait for mapping data access.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for the persisted mapping table.
///
/// Each method is a single storage round trip with no implicit retries;
/// retry policy belongs to the caller
/// ([`crate::application::services::MappingService`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping as a single atomic row write.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CodeTaken`] if the short code already exists
    /// (unique constraint on `code`).
    ///
    /// Returns [`StoreError::Storage`] on other database errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError>;

    /// Finds a live mapping by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError>;

    /// Finds a live mapping by its original long URL, exact string match.
    ///
    /// Used to deduplicate shorten requests for an already-stored URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, StoreError>;

    /// Removes the mapping with the given short code.
    ///
    /// Returns the number of rows removed (0 or 1; `code` uniqueness
    /// guarantees at most one).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<u64, StoreError>;
}
