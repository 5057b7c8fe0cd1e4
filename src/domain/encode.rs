//! Arabic to Roman encoding
//!
//! Digits are encoded one decimal place at a time, least significant first,
//! using the symbol window for that place. Past the last window the remaining
//! magnitude is tallied with the highest "one" symbol, ten per unit.

use super::symbols::{symbol_window, SymbolWindow};

/// Converts `n` to an uppercase Roman numeral, most significant symbol first.
///
/// Zero has no Roman form and yields an empty string. Values from ten million
/// upward are written as blocks of ten overlined `M`.
pub fn to_roman(n: u32) -> String {
    let n = u64::from(n);
    let mut pieces: Vec<String> = Vec::new();
    let mut last_one = "";
    let mut place = 0;
    let mut place_value: u64 = 1;

    while place_value <= n {
        match symbol_window(place) {
            Some(window) => {
                let digit = (n / place_value) % 10;
                pieces.push(encode_digit(digit, window));
                last_one = window.one;
            }
            None => {
                let blocks = (n / place_value) as usize;
                pieces.push(last_one.repeat(blocks * 10));
                break;
            }
        }
        place += 1;
        place_value *= 10;
    }

    pieces.iter().rev().map(String::as_str).collect()
}

/// Encodes a single decimal digit with subtractive notation where the window allows it.
fn encode_digit(digit: u64, window: SymbolWindow) -> String {
    let one = window.one;
    match (digit, window.five, window.ten) {
        (9, _, Some(ten)) => format!("{one}{ten}"),
        (4, Some(five), _) => format!("{one}{five}"),
        (5..=8, Some(five), _) => format!("{five}{}", one.repeat(digit as usize - 5)),
        // no five/ten available: plain tally
        _ => one.repeat(digit as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_zero_when_encoding_then_empty() {
        assert_eq!(to_roman(0), "");
    }

    #[test]
    fn given_subtractive_digits_when_encoding_then_uses_pairs() {
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(40), "XL");
        assert_eq!(to_roman(90), "XC");
        assert_eq!(to_roman(400), "CD");
        assert_eq!(to_roman(900), "CM");
    }

    #[test]
    fn given_1999_when_encoding_then_mcmxcix() {
        assert_eq!(to_roman(1999), "MCMXCIX");
    }

    #[test]
    fn given_thousands_when_encoding_then_overlines_take_over_at_four() {
        assert_eq!(to_roman(3000), "MMM");
        assert_eq!(to_roman(4000), "MV\u{0305}");
        assert_eq!(to_roman(5000), "V\u{0305}");
        assert_eq!(to_roman(9000), "MX\u{0305}");
    }

    #[test]
    fn given_one_million_when_encoding_then_single_overlined_m() {
        assert_eq!(to_roman(1_000_000), "M\u{0305}");
    }

    #[test]
    fn given_millions_digit_above_three_when_encoding_then_tallies() {
        assert_eq!(to_roman(4_000_000), "M\u{0305}".repeat(4));
        assert_eq!(to_roman(9_000_000), "M\u{0305}".repeat(9));
    }

    #[test]
    fn given_ten_million_when_encoding_then_ten_overlined_m() {
        assert_eq!(to_roman(10_000_000), "M\u{0305}".repeat(10));
    }

    #[test]
    fn given_value_past_table_when_encoding_then_lower_digits_still_encoded() {
        let expected = format!("{}{}", "M\u{0305}".repeat(120), to_roman(3_456_789));
        assert_eq!(to_roman(123_456_789), expected);
    }

    #[test]
    fn test_encode_digit_full_window() {
        let window = symbol_window(0).expect("units window");
        let encoded: Vec<String> = (0..10).map(|d| encode_digit(d, window)).collect();
        assert_eq!(
            encoded,
            vec!["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"]
        );
    }
}
