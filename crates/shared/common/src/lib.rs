//! Common utilities shared across the resource services and the gateway.
//!
//! This crate provides:
//! - Unified HTTP error handling
//! - The validated JSON payload extractor

pub mod error;
pub mod extractors;

pub use error::{AppError, AppResult};
pub use extractors::ValidatedJson;
