//! Business logic services orchestrating domain operations.

pub mod mapping_service;

pub use mapping_service::MappingService;
