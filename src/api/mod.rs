//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into mapping store operations and formats
//! responses according to the public wire contract.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
