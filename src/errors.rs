//! Error types for encoding letters and digit strings.
//!
//! # Error Codes
//!
//! - E001: `InvalidLetter` (Character is not a keypad letter)
//! - E002: `InvalidDigit` (Character is not a decimal digit)
//!
//! Filtering raw phone numbers never fails: characters that produce no digit are
//! skipped. These errors only come from the strict paths, where the caller has
//! promised the input is already clean.
//!
//! # Examples
//!
//! ```
//! use phonecode::digits::DigitString;
//! use phonecode::errors::EncodingError;
//!
//! match "12a4".parse::<DigitString>() {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E002");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

/// Errors raised when strict encoding meets a character it cannot handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("'{invalid_char}' is not a keypad letter")]
    InvalidLetter { invalid_char: char },

    #[error("'{invalid_char}' at position {position} is not a decimal digit")]
    InvalidDigit { invalid_char: char, position: usize },
}

impl From<Box<EncodingError>> for std::io::Error {
    fn from(e: Box<EncodingError>) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    }
}

impl EncodingError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            EncodingError::InvalidLetter { .. } => "E001",
            EncodingError::InvalidDigit { .. } => "E002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            EncodingError::InvalidLetter { .. } => "Character is not a keypad letter",
            EncodingError::InvalidDigit { .. } => "Character is not a decimal digit",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            EncodingError::InvalidLetter { .. } => "Only the 26 ASCII letters (either case) have a digit in the keypad table. Words are encoded leniently (other characters are skipped), so this only happens when a single character is encoded directly.",
            EncodingError::InvalidDigit { .. } => "A digit string was parsed strictly and contained something other than 0-9. Raw phone numbers should go through the lenient filter, which drops separators like '-' and '/'.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            EncodingError::InvalidLetter { .. } => Some("Filter the input to letters a-z / A-Z before encoding"),
            EncodingError::InvalidDigit { .. } => Some("Use DigitString::from_phone_number for raw input such as '0721/608-4067'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<EncodingError> {
        vec![
            EncodingError::InvalidLetter { invalid_char: '%' },
            EncodingError::InvalidDigit { invalid_char: 'x', position: 3 },
        ]
    }

    #[test]
    fn test_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            assert!(codes.insert(err.code()), "Duplicate error code found: {}", err.code());
        }
    }

    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters (E0XX)");
            assert!(code.starts_with("E0"));
            assert!(code[1..].parse::<u16>().is_ok());
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in all_variants() {
            let detailed = err.display_detailed();
            assert!(detailed.contains(err.code()));
            assert!(detailed.contains(&err.to_string()));
            if let Some(help) = err.help() {
                assert!(detailed.contains(help));
                assert_ne!(help, err.to_string());
            }
        }
    }

    #[test]
    fn test_invalid_digit_message_has_position() {
        let err = EncodingError::InvalidDigit { invalid_char: '-', position: 4 };
        assert_eq!(err.to_string(), "'-' at position 4 is not a decimal digit");
    }

    #[test]
    fn test_format_without_help() {
        assert_eq!(format_error_with_code_and_help("boom", "E999", None), "boom (E999)");
    }

    #[test]
    fn test_into_io_error() {
        let io: std::io::Error = Box::new(EncodingError::InvalidLetter { invalid_char: '1' }).into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
        assert!(io.to_string().contains("'1'"));
    }
}
