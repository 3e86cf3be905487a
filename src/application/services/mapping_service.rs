//! Mapping store: short code allocation, deduplication, resolution, deletion.

use std::sync::Arc;

use crate::domain::entities::NewMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::StoreError;
use crate::utils::code_generator::generate_code;

/// Insert attempts before giving up on short code allocation.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Service owning the mapping lifecycle.
///
/// Performs no in-process locking; the storage engine's unique constraint on
/// `code` is the only concurrency safety net. The dedup check and the insert
/// are separate round trips, so two concurrent shortens of the same new URL
/// may both insert — an accepted artifact, each caller still gets a working
/// code.
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<dyn MappingRepository>) -> Self {
        Self { repository }
    }

    /// Returns a short code for `long_url`, creating a mapping if needed.
    ///
    /// # Deduplication
    ///
    /// If a mapping for the exact same URL already exists, its code is
    /// returned without consuming a new random draw or writing a row.
    ///
    /// # Code allocation
    ///
    /// New codes are 3 random bytes hex-encoded. An insert rejected by the
    /// `code` unique constraint is retried with a freshly drawn code, up to
    /// [`MAX_CODE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingInput`] for an empty URL,
    /// [`StoreError::CodeSpaceExhausted`] when the retry budget runs out, and
    /// [`StoreError::Storage`] on other storage failures.
    pub async fn shorten(&self, long_url: &str) -> Result<String, StoreError> {
        if long_url.is_empty() {
            return Err(StoreError::MissingInput("url"));
        }

        if let Some(existing) = self.repository.find_by_long_url(long_url).await? {
            return Ok(existing.code);
        }

        for attempt in 0..MAX_CODE_ATTEMPTS {
            let new_mapping = NewMapping {
                code: generate_code(),
                long_url: long_url.to_string(),
            };

            match self.repository.insert(new_mapping).await {
                Ok(mapping) => return Ok(mapping.code),
                Err(StoreError::CodeTaken) => {
                    tracing::warn!(attempt, "code collision, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_CODE_ATTEMPTS,
            "exhausted short code allocation attempts"
        );
        Err(StoreError::CodeSpaceExhausted)
    }

    /// Resolves a short code back to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingInput`] for an empty code and
    /// [`StoreError::NotFound`] when no live mapping matches.
    pub async fn resolve(&self, code: &str) -> Result<String, StoreError> {
        if code.is_empty() {
            return Err(StoreError::MissingInput("code"));
        }

        let mapping = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or(StoreError::NotFound)?;

        Ok(mapping.long_url)
    }

    /// Permanently removes the mapping for `code`.
    ///
    /// The code becomes immediately eligible for reuse by a future shorten's
    /// random draw.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingInput`] for an empty code and
    /// [`StoreError::NotFound`] when no row was removed.
    pub async fn delete(&self, code: &str) -> Result<(), StoreError> {
        if code.is_empty() {
            return Err(StoreError::MissingInput("code"));
        }

        let removed = self.repository.delete_by_code(code).await?;

        if removed == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
