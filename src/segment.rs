use std::fmt;
use std::fmt::{Display, Formatter};

use crate::keypad::{word_to_encoding, Encoding};

/// One unit of a solution: a dictionary word, or a single digit standing in
/// for a position no word could cover.
///
/// Words borrow from the [`Dictionary`](crate::dictionary::Dictionary), so a
/// solution is cheap to build and never outlives the dictionary it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'d> {
    Word(&'d str),
    /// ASCII digit byte, `b'0'..=b'9'`.
    Digit(u8),
}

/// A complete decomposition of a digit string, in order.
pub type Solution<'d> = Vec<Segment<'d>>;

impl Segment<'_> {
    #[must_use]
    pub fn is_digit(&self) -> bool {
        matches!(self, Segment::Digit(_))
    }

    /// How many digits of the phone number this segment covers.
    #[must_use]
    pub fn digit_len(&self) -> usize {
        match self {
            Segment::Word(w) => word_to_encoding(w).len(),
            Segment::Digit(_) => 1,
        }
    }

    /// Re-encode the segment. A digit encodes to itself.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        match self {
            Segment::Word(w) => word_to_encoding(w),
            Segment::Digit(d) => Encoding::from_digit(*d),
        }
    }
}

impl Display for Segment<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Word(w) => f.write_str(w),
            Segment::Digit(d) => write!(f, "{}", char::from(*d)),
        }
    }
}

/// Render a solution the way the CLI prints it: `"<number>: seg1 seg2 ..."`.
#[must_use]
pub fn format_solution(number: &str, solution: &[Segment<'_>]) -> String {
    let segments: Vec<String> = solution.iter().map(ToString::to_string).collect();
    format!("{number}: {}", segments.join(" "))
}
