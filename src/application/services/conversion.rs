//! Conversion service
//!
//! Parses textual input, runs the domain encoder or decoder, and formats the
//! result back to text.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{from_roman, to_roman};

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Roman numerals in, decimal out. Selected with `I` or `i`.
    ToArabic,
    /// Decimal in, Roman numerals out. Selected with `1`.
    #[default]
    ToRoman,
}

impl FromStr for Mode {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" | "i" => Ok(Mode::ToArabic),
            "1" => Ok(Mode::ToRoman),
            other => Err(ApplicationError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::ToArabic => write!(f, "I"),
            Mode::ToRoman => write!(f, "1"),
        }
    }
}

/// Parses a base-10 `u32` and encodes it as a Roman numeral.
pub fn from_arabic_string(input: &str) -> ApplicationResult<String> {
    let value = input
        .parse::<u32>()
        .map_err(|source| ApplicationError::InvalidNumber {
            input: input.to_string(),
            source,
        })?;
    Ok(to_roman(value))
}

/// Decodes a Roman numeral and formats the value in base 10.
pub fn to_arabic_string(input: &str) -> ApplicationResult<String> {
    let value = from_roman(input)?;
    Ok(value.to_string())
}

/// Converts textual values in a fixed direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionService {
    mode: Mode,
}

impl ConversionService {
    /// Create a new conversion service.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Convert one value according to the configured mode.
    pub fn convert(&self, input: &str) -> ApplicationResult<String> {
        let output = match self.mode {
            Mode::ToArabic => to_arabic_string(input),
            Mode::ToRoman => from_arabic_string(input),
        }?;
        debug!("convert: mode={} {:?} -> {:?}", self.mode, input, output);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_roman_mode_letters_when_parsing_then_to_arabic() {
        assert_eq!("I".parse::<Mode>().unwrap(), Mode::ToArabic);
        assert_eq!("i".parse::<Mode>().unwrap(), Mode::ToArabic);
    }

    #[test]
    fn given_one_when_parsing_mode_then_to_roman() {
        assert_eq!("1".parse::<Mode>().unwrap(), Mode::ToRoman);
        assert_eq!(Mode::default(), Mode::ToRoman);
    }

    #[test]
    fn given_unknown_mode_when_parsing_then_invalid_mode() {
        let err = "x".parse::<Mode>().unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidMode(ref m) if m == "x"));
    }

    #[test]
    fn given_mode_when_displayed_then_round_trips_through_from_str() {
        for mode in [Mode::ToArabic, Mode::ToRoman] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn given_non_numeric_text_when_from_arabic_then_invalid_number() {
        let err = from_arabic_string("12a").unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidNumber { ref input, .. } if input == "12a"));
    }

    #[test]
    fn given_value_above_u32_when_from_arabic_then_invalid_number() {
        assert!(matches!(
            from_arabic_string("4294967296"),
            Err(ApplicationError::InvalidNumber { .. })
        ));
        assert!(!from_arabic_string("4294967295").unwrap().is_empty());
    }

    #[test]
    fn given_bad_numeral_when_to_arabic_then_domain_error() {
        let err = to_arabic_string("ABC").unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::UnrecognizedCharacter('B'))
        ));
        assert!(err.to_string().contains("'B'"));
    }

    #[test]
    fn given_service_when_converting_then_dispatches_on_mode() {
        let to_roman = ConversionService::new(Mode::ToRoman);
        let to_arabic = ConversionService::new(Mode::ToArabic);
        assert_eq!(to_roman.convert("1999").unwrap(), "MCMXCIX");
        assert_eq!(to_arabic.convert("MCMXCIX").unwrap(), "1999");
    }
}
