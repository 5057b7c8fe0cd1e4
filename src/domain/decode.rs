//! Roman to Arabic decoding
//!
//! The numeral is scanned right to left keeping the largest symbol value
//! seen so far: smaller values are subtracted, anything else is added.
//! No further grammar is enforced, so `VL` decodes to 45.

use super::error::{DomainError, DomainResult};
use super::symbols::{letter_value, OVERLINE, OVERLINE_MULTIPLIER};

/// Decodes a Roman numeral, case-insensitively.
///
/// A letter followed by U+0305 COMBINING OVERLINE counts a thousand times its
/// value. The empty string decodes to 0.
///
/// # Errors
/// * [`DomainError::UnrecognizedCharacter`] for the first character, scanning
///   from the right, that is not one of `IVXLCDM` (a stray overline included).
/// * [`DomainError::OutOfRange`] when the result does not fit in a `u32`.
pub fn from_roman(numeral: &str) -> DomainResult<u32> {
    let upper = numeral.to_uppercase();
    let mut chars = upper.chars().rev();
    let mut max = 0u32;
    let mut total = 0i64;

    while let Some(current) = chars.next() {
        let (letter, multiplier) = if current == OVERLINE {
            match chars.next() {
                Some(base) => (base, OVERLINE_MULTIPLIER),
                None => return Err(DomainError::UnrecognizedCharacter(OVERLINE)),
            }
        } else {
            (current, 1)
        };

        let value = letter_value(letter).ok_or(DomainError::UnrecognizedCharacter(letter))?
            * multiplier;

        if value < max {
            total -= i64::from(value);
        } else {
            total += i64::from(value);
            max = value;
        }
    }

    u32::try_from(total).map_err(|_| DomainError::OutOfRange(numeral.to_string()))
}
