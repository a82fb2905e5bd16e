//! Domain error types

use thiserror::Error;

/// Errors surfaced by account operations.
///
/// The first three variants carry the caller-facing meaning (missing
/// entity, invalid request, insufficient rights). `Storage` and
/// `Crypto` wrap collaborator failures and propagate unchanged.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Crypto error: {0}")]
    Crypto(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
