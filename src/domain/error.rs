//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Invalid age range: {0}")]
    InvalidAgeRange(String),

    #[error("Invalid birthdate: {0}")]
    InvalidBirthdate(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Remote service error: {0}")]
    Remote(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
