//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only presence validation lives here; token failures belong to `restlab-auth`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required request field was absent, `null`, or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl DomainError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
        }
    }
}
