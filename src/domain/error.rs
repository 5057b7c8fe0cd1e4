//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors raised by the numeral algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unrecognized character: {0:?}")]
    UnrecognizedCharacter(char),

    #[error("numeral out of range for a 32-bit unsigned value: {0}")]
    OutOfRange(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
