//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Duplicate entity: {0}")]
    Duplicate(String),
}

/// Repository-level errors, reported by whatever store backs the ports.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Backend unavailable: {0}")]
    Connection(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
