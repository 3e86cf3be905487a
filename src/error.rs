//! Error taxonomy for the mapping store.
//!
//! The store returns typed errors; HTTP handlers own the mapping to status
//! codes and fixed client-facing messages, so raw storage error text never
//! reaches a client. Full detail is logged server-side instead.

use thiserror::Error;

/// Errors produced by the mapping store and its repository.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required input field or parameter was missing or empty.
    /// Always client-caused, never retried.
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    /// The requested short code has no live mapping.
    #[error("short code not found")]
    NotFound,

    /// An insert collided with an existing short code.
    ///
    /// Retryable: the store regenerates a fresh code and tries again.
    #[error("short code already taken")]
    CodeTaken,

    /// No unique short code could be allocated within the retry budget.
    #[error("could not allocate a unique short code")]
    CodeSpaceExhausted,

    /// The storage engine failed.
    #[error("storage failure")]
    Storage(#[from] sqlx::Error),
}
