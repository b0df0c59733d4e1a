//! Domain-level errors.
//!
//! These errors represent violations of the resource store contract. They are
//! independent of transport concerns; the `common` crate maps them to HTTP.

use thiserror::Error;

/// Domain-specific errors for resource store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Create with an identifier that is already taken
    #[error("{0} already exists")]
    Duplicate(String),

    /// Referenced record does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Path and payload identifiers disagree (User update only)
    #[error("{0}")]
    IdMismatch(String),

    /// Malformed or missing required field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a duplicate-identifier error
    pub fn duplicate(entity: impl Into<String>) -> Self {
        DomainError::Duplicate(entity.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }

    /// Create an identifier-mismatch error
    pub fn id_mismatch(msg: impl Into<String>) -> Self {
        DomainError::IdMismatch(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Extension trait for Option -> DomainError conversion
pub trait OptionExt<T> {
    /// Turn a missing record into a `NotFound` error for the given entity.
    fn ok_or_not_found(self, entity: &str) -> DomainResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> DomainResult<T> {
        self.ok_or_else(|| DomainError::not_found(entity))
    }
}
