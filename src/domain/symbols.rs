//! Symbol table and value map
//!
//! Symbols are stored in place order: for decimal place `p` the "one",
//! "five" and "ten" symbols sit at `2p`, `2p + 1` and `2p + 2`.
//! Overlined symbols are written the way they are read: the base letter
//! followed by U+0305 COMBINING OVERLINE.

/// Combining overline; multiplies the preceding letter by [`OVERLINE_MULTIPLIER`].
pub const OVERLINE: char = '\u{0305}';

pub const OVERLINE_MULTIPLIER: u32 = 1000;

/// Highest decimal place with a symbol window.
pub const MAX_PLACE: usize = 6;

/// Roman symbols in place order, classical letters first then the overlined set.
pub const SYMBOLS: [&str; 13] = [
    "I",
    "V",
    "X",
    "L",
    "C",
    "D",
    "M",
    "V\u{0305}",
    "X\u{0305}",
    "L\u{0305}",
    "C\u{0305}",
    "D\u{0305}",
    "M\u{0305}",
];

/// The three symbols usable for one decimal place.
///
/// `five` and `ten` are absent only for the highest place, where the table
/// runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolWindow {
    pub one: &'static str,
    pub five: Option<&'static str>,
    pub ten: Option<&'static str>,
}

/// Returns the symbol window for decimal `place` (0 = units).
///
/// `None` means no symbol is available for that place and the caller must
/// fall back to tallying.
pub fn symbol_window(place: usize) -> Option<SymbolWindow> {
    if place > MAX_PLACE {
        return None;
    }
    let base = place * 2;
    Some(SymbolWindow {
        one: SYMBOLS.get(base).copied()?,
        five: SYMBOLS.get(base + 1).copied(),
        ten: SYMBOLS.get(base + 2).copied(),
    })
}

/// Value of a single uppercase Roman letter.
pub fn letter_value(letter: char) -> Option<u32> {
    match letter {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}
