//! Domain layer: numeral tables and the two conversion algorithms
//!
//! This layer is pure (no I/O, no logging, no config loading).

pub mod decode;
pub mod encode;
pub mod error;
pub mod symbols;

pub use decode::from_roman;
pub use encode::to_roman;
pub use error::{DomainError, DomainResult};
pub use symbols::{letter_value, symbol_window, SymbolWindow, OVERLINE};
