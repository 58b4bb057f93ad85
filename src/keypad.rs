//! The fixed letter → digit table and the word encoder built on it.
//!
//! ```text
//! 0: E        1: J N Q    2: R W X    3: D S Y
//! 4: F T      5: A M      6: C I V    7: B K U
//! 8: L O P    9: G H Z
//! ```
//!
//! Digits are kept as ASCII bytes (`b'0'..=b'9'`) throughout the crate, so an
//! [`Encoding`] and a sub-slice of a [`DigitString`](crate::digits::DigitString)
//! compare directly without any conversion.

use std::borrow::Borrow;
use std::fmt;

use crate::errors::EncodingError;

/// Letters per digit, indexed by the digit value.
pub const KEYPAD_GROUPS: [&str; 10] = [
    "e",
    "jnq",
    "rwx",
    "dsy",
    "ft",
    "am",
    "civ",
    "bku",
    "lop",
    "ghz",
];

pub(crate) const ALPHABET_SIZE: usize = 26;

/// Map a letter (either case) to its ASCII digit byte.
///
/// # Errors
///
/// Returns [`EncodingError::InvalidLetter`] for anything that isn't an ASCII letter.
/// Callers are expected to filter first, so hitting this means the input skipped filtering.
pub fn char_to_digit(c: char) -> Result<u8, Box<EncodingError>> {
    c.keypad_digit()
        .ok_or_else(|| Box::new(EncodingError::InvalidLetter { invalid_char: c }))
}

/// Encode a word by mapping each ASCII letter through the table.
///
/// Everything else (quotes standing in for umlauts, hyphens, spaces) is skipped,
/// so `Bo"` encodes to `78`. A word without letters encodes to the empty sequence.
#[must_use]
pub fn word_to_encoding(word: &str) -> Encoding {
    Encoding(word.chars().filter_map(|c| c.keypad_digit()).collect())
}

/// Digit sequence derived from a dictionary word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Encoding(Vec<u8>);

impl Encoding {
    pub(crate) fn from_digit(digit: u8) -> Encoding {
        debug_assert!(digit.is_ascii_digit(), "expected an ASCII digit, got {digit}");
        Encoding(vec![digit])
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// `Hash`/`Eq` on `Encoding` are derived from the inner `Vec<u8>`, which hashes and
// compares exactly like `[u8]`, so map lookups by slice are sound.
impl Borrow<[u8]> for Encoding {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // only ASCII digits are ever pushed
        f.write_str(std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?)
    }
}

pub trait KeypadChar {
    /// ASCII letter present in the keypad table.
    fn is_keypad_letter(&self) -> bool;
    /// Letter or ASCII digit, i.e. something that contributes a digit to a phone number.
    fn is_digit_producing(&self) -> bool;
    /// ASCII digit byte for a letter, `None` for anything else.
    fn keypad_digit(&self) -> Option<u8>;
}

impl KeypadChar for char {
    fn is_keypad_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }

    fn is_digit_producing(&self) -> bool {
        self.is_ascii_alphanumeric()
    }

    fn keypad_digit(&self) -> Option<u8> {
        let digit = match self.to_ascii_lowercase() {
            'e' => b'0',
            'j' | 'n' | 'q' => b'1',
            'r' | 'w' | 'x' => b'2',
            'd' | 's' | 'y' => b'3',
            'f' | 't' => b'4',
            'a' | 'm' => b'5',
            'c' | 'i' | 'v' => b'6',
            'b' | 'k' | 'u' => b'7',
            'l' | 'o' | 'p' => b'8',
            'g' | 'h' | 'z' => b'9',
            _ => return None,
        };
        Some(digit)
    }
}
