//! Application layer: services coordinating domain entities and repositories.

pub mod services;
