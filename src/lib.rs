//! Conversion between arabic and roman numerals.
//!
//! Values above the classical range use the vinculum: a letter followed by
//! U+0305 COMBINING OVERLINE counts a thousand times its value, so one
//! million is `M̅`. Beyond the overlined `M` the encoder tallies blocks of
//! ten `M̅`.
//!
//! ```
//! assert_eq!(roconv::to_roman(1999), "MCMXCIX");
//! assert_eq!(roconv::from_roman("mcmxcix").unwrap(), 1999);
//! assert_eq!(roconv::to_arabic_string("M\u{0305}").unwrap(), "1000000");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{
    from_arabic_string, to_arabic_string, ApplicationError, ApplicationResult, ConversionService,
    Mode,
};
pub use domain::{from_roman, to_roman, DomainError, DomainResult};
