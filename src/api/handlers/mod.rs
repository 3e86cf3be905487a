//! HTTP request handlers for API endpoints.
//!
//! Handlers translate [`crate::error::StoreError`] kinds into fixed status
//! codes and stable, minimal client-facing messages; raw storage errors are
//! logged server-side only.

pub mod delete;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use delete::delete_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
