//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent catalog contract violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("duplicate {level} id within sibling collection: {id}")]
    DuplicateId { level: String, id: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
