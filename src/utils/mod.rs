//! Shared utilities.

pub mod code_generator;
pub mod db_error;
