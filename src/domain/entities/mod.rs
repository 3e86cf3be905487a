//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! uses a separate struct ([`NewMapping`]) so the database-assigned fields
//! never appear half-initialized.

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
