//! Application services
//!
//! Concrete conversion entry points used by the CLI and by library callers.

mod conversion;

pub use conversion::{from_arabic_string, to_arabic_string, ConversionService, Mode};
