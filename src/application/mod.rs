//! Application layer: string adapters and conversion use cases
//!
//! This layer wraps the pure domain algorithms with textual input/output.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{from_arabic_string, to_arabic_string, ConversionService, Mode};
