//! Application-level errors (wraps domain errors)

use std::num::ParseIntError;

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add input parsing context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid number {input:?}: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid mode {0:?}: expected 'I' or 'i' (roman to arabic) or '1' (arabic to roman)")]
    InvalidMode(String),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
