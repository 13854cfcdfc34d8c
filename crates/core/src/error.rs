//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, ValidationError>;

/// The single failure kind surfaced by the domain.
///
/// Raised synchronously at the point a rule is broken. The message names the
/// rule, e.g. "Quantity must be a positive integer not exceeding 1000".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
