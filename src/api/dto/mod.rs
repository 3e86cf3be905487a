//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field names
//! follow the public wire contract (`shortUrl`, `url`, `message`), not Rust
//! naming.

pub mod delete;
pub mod health;
pub mod redirect;
pub mod shorten;
