//! `digits` — turning raw phone-number text into the digit strings the translator searches.
//!
//! Two filters are offered:
//! - [`FilterMode::MapLetters`] (the default) keeps ASCII letters and digits and maps
//!   letters through the keypad, so `"1-800-FLOWERS"` becomes `18004882023`.
//! - [`FilterMode::DigitsOnly`] keeps ASCII digits and drops everything else,
//!   letters included. This matches the classic benchmark inputs, which never
//!   contain letters.
//!
//! Neither filter fails; characters that don't produce a digit are skipped.
//! Strict parsing (`"0123".parse::<DigitString>()`) is for input that is already clean.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::errors::EncodingError;
use crate::keypad::KeypadChar;

/// How non-digit characters in a raw phone number are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    MapLetters,
    DigitsOnly,
}

/// Digits-only form of a phone number, stored as ASCII bytes `b'0'..=b'9'`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitString(Vec<u8>);

impl DigitString {
    /// Keep letters and digits; letters become their keypad digit.
    #[must_use]
    pub fn from_phone_number(raw: &str) -> Self {
        DigitString(
            raw.chars()
                .filter(|c| c.is_digit_producing())
                .filter_map(|c| if c.is_ascii_digit() { Some(c as u8) } else { c.keypad_digit() })
                .collect(),
        )
    }

    /// Keep ASCII digits only.
    #[must_use]
    pub fn from_digits_only(raw: &str) -> Self {
        DigitString(raw.bytes().filter(u8::is_ascii_digit).collect())
    }

    #[must_use]
    pub fn filter(raw: &str, mode: FilterMode) -> Self {
        match mode {
            FilterMode::MapLetters => Self::from_phone_number(raw),
            FilterMode::DigitsOnly => Self::from_digits_only(raw),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for DigitString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for DigitString {
    type Err = Box<EncodingError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| {
                if c.is_ascii_digit() {
                    Ok(c as u8)
                } else {
                    Err(Box::new(EncodingError::InvalidDigit { invalid_char: c, position }))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(DigitString)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?)
    }
}

/// A phone number as read, plus the digits it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    /// Original text, echoed verbatim in output lines.
    pub raw: String,
    pub digits: DigitString,
}

impl PhoneNumber {
    #[must_use]
    pub fn new(raw: &str, mode: FilterMode) -> Self {
        PhoneNumber { raw: raw.to_string(), digits: DigitString::filter(raw, mode) }
    }
}

/// Phone numbers in file order.
#[derive(Debug, Clone, Default)]
pub struct NumberList {
    pub numbers: Vec<PhoneNumber>,
}

impl NumberList {
    /// One number per line. Blank lines are skipped; surrounding whitespace
    /// (including a `\r` from CRLF files) is trimmed from the echoed text.
    #[must_use]
    pub fn parse_from_str(contents: &str, mode: FilterMode) -> NumberList {
        let numbers = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| PhoneNumber::new(line, mode))
            .collect();

        NumberList { numbers }
    }

    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P, mode: FilterMode) -> std::io::Result<NumberList> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read phone numbers from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data, mode))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}
