//! The search that turns a digit string into every rendering as words and lone digits.
//!
//! # Rules
//!
//! Working left to right from a position `start`:
//!
//! 1. Every dictionary word whose encoding equals `digits[start..end]`, for any
//!    `end`, may be placed next. Shorter prefixes are tried first; words sharing an
//!    encoding are tried in word-list order.
//! 2. Only if *no* prefix starting at `start` matches any word may the single digit
//!    at `start` be used verbatim, and only if the previous segment was not itself a
//!    digit. A position with no words after a digit is a dead end.
//! 3. Reaching the end of the digits completes a solution.
//!
//! Rule 2 is decided per position, so one matching prefix anywhere ahead suppresses
//! the digit at that position even on branches where that word later dead-ends.
//!
//! # Examples
//!
//! ```
//! use phonecode::dictionary::Dictionary;
//! use phonecode::digits::DigitString;
//! use phonecode::segment::format_solution;
//! use phonecode::translator::translate;
//!
//! let dict = Dictionary::build(["so", "Tor"]);
//! let digits = DigitString::from_phone_number("381482");
//!
//! let lines: Vec<String> = translate(&digits, &dict)
//!     .map(|solution| format_solution("381482", &solution))
//!     .collect();
//! assert_eq!(lines, vec!["381482: so 1 Tor"]);
//! ```
//!
//! ## Capping the search
//!
//! ```
//! use std::time::Duration;
//! use phonecode::dictionary::Dictionary;
//! use phonecode::translator::{translate_with_limits, Limits, TranslateStatus};
//!
//! let dict = Dictionary::build(["a", "m"]);
//! let limits = Limits { max_solutions: Some(3), time_budget: Some(Duration::from_secs(5)) };
//! let result = translate_with_limits(b"5555", &dict, &limits);
//!
//! assert_eq!(result.solutions.len(), 3);
//! assert_eq!(result.status, TranslateStatus::FoundEnough);
//! ```

use std::time::Duration;

use instant::Instant;

use crate::dictionary::Dictionary;
use crate::digits::PhoneNumber;
use crate::segment::{Segment, Solution};

// How many search steps pass between wall-clock checks
const BUDGET_CHECK_INTERVAL: u32 = 256;

/// Simple helper to enforce a wall-clock time limit.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    start: Instant,   // when the budget began
    limit: Duration,  // maximum allowed elapsed time
}

impl TimeBudget {
    /// Create a new budget that lasts for `limit`, starting now.
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    /// How long this budget has been running.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns true if the allowed time has fully elapsed.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Optional caps for [`translate_with_limits`]. The default is no cap at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_solutions: Option<usize>,
    pub time_budget: Option<Duration>,
}

/// Why a capped translation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateStatus {
    /// Every solution was produced.
    Exhausted,

    /// Stopped early because `max_solutions` was reached.
    FoundEnough,

    /// Stopped because the time budget expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Solutions collected by [`translate_with_limits`].
#[derive(Debug, Clone)]
pub struct TranslateResult<'d> {
    pub solutions: Vec<Solution<'d>>,
    pub status: TranslateStatus,
}

impl<'d> IntoIterator for TranslateResult<'d> {
    type Item = Solution<'d>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

/// Search state for one position of the digit string.
///
/// `end` is the exclusive end of the prefix whose words are being handed out,
/// `words` the lookup result for `digits[start..end]`, and `next_word` the
/// index of the next one to try.
#[derive(Debug)]
struct Frame<'d> {
    start: usize,
    end: usize,
    words: &'d [String],
    next_word: usize,
    found_word: bool,
    fallback_tried: bool,
}

impl<'d> Frame<'d> {
    fn new(start: usize, digits: &[u8], dict: &'d Dictionary) -> Self {
        debug_assert!(start < digits.len(), "frame start {start} past end {}", digits.len());
        Frame {
            start,
            end: start + 1,
            words: dict.lookup(&digits[start..=start]),
            next_word: 0,
            found_word: false,
            fallback_tried: false,
        }
    }
}

/// Lazy, depth-first enumeration of solutions. Created by [`translate`].
///
/// The search keeps an explicit stack of frames instead of recursing, pushing a
/// segment when it descends and popping it when it backtracks, so the only state
/// shared between sibling branches is the segment path, which always holds exactly
/// the segments leading to the top frame.
#[derive(Debug)]
pub struct Translations<'a, 'd> {
    digits: &'a [u8],
    dict: &'d Dictionary,
    frames: Vec<Frame<'d>>,
    path: Vec<Segment<'d>>,
    budget: Option<TimeBudget>,
    steps: u32,
    timed_out: bool,
}

/// Enumerate every solution for `digits` (ASCII digit bytes) against `dict`.
///
/// Nothing is cached: calling this again with the same inputs yields the same
/// solutions in the same order. An empty digit string has no solutions.
#[must_use]
pub fn translate<'a, 'd>(digits: &'a [u8], dict: &'d Dictionary) -> Translations<'a, 'd> {
    debug_assert!(
        digits.iter().all(u8::is_ascii_digit),
        "digit strings must hold ASCII digits only"
    );

    let frames = if digits.is_empty() {
        Vec::new()
    } else {
        vec![Frame::new(0, digits, dict)]
    };

    Translations {
        digits,
        dict,
        frames,
        path: Vec::with_capacity(digits.len()),
        budget: None,
        steps: 0,
        timed_out: false,
    }
}

impl Translations<'_, '_> {
    /// Stop the enumeration once `budget` expires. Checked every few hundred steps,
    /// so a long dead-end search is interrupted too, not just a long run of solutions.
    #[must_use]
    pub fn with_budget(mut self, budget: TimeBudget) -> Self {
        self.budget = Some(budget);
        self
    }

    /// True if the enumeration ended because the budget ran out.
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Time spent against the budget, if one was set.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.budget.as_ref().map(TimeBudget::elapsed)
    }

    fn budget_expired(&mut self) -> bool {
        let Some(budget) = &self.budget else {
            return false;
        };
        self.steps = self.steps.wrapping_add(1);
        self.steps % BUDGET_CHECK_INTERVAL == 0 && budget.expired()
    }
}

impl<'d> Iterator for Translations<'_, 'd> {
    type Item = Solution<'d>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.digits.len();

        loop {
            if self.budget_expired() {
                self.timed_out = true;
                self.frames.clear();
                self.path.clear();
                return None;
            }

            let depth = self.frames.len();
            let frame = self.frames.last_mut()?;
            debug_assert_eq!(
                self.path.len() + 1, depth,
                "segment path ({}) must be one shorter than the frame stack ({depth})",
                self.path.len()
            );

            // Hand out the next word for the current prefix, growing the prefix
            // one digit at a time until the end of the digits or the longest
            // encoding in the dictionary.
            let max_end = len.min(frame.start + self.dict.max_encoding_len());
            let mut step = None;
            loop {
                let words = frame.words;
                if let Some(word) = words.get(frame.next_word) {
                    frame.next_word += 1;
                    frame.found_word = true;
                    step = Some((Segment::Word(word.as_str()), frame.end));
                    break;
                }
                if frame.end >= max_end {
                    break;
                }
                frame.end += 1;
                frame.next_word = 0;
                frame.words = self.dict.lookup(&self.digits[frame.start..frame.end]);
            }

            // Digit fallback: only where no prefix matched, never twice in a row.
            if step.is_none() && !frame.found_word && !frame.fallback_tried {
                frame.fallback_tried = true;
                if !self.path.last().is_some_and(Segment::is_digit) {
                    step = Some((Segment::Digit(self.digits[frame.start]), frame.start + 1));
                }
            }

            match step {
                Some((segment, next_start)) => {
                    debug_assert_eq!(
                        next_start - self.frames[depth - 1].start,
                        segment.digit_len(),
                        "segment {segment} does not cover the digits it consumed"
                    );
                    self.path.push(segment);
                    if next_start == len {
                        let solution = self.path.clone();
                        self.path.pop();
                        return Some(solution);
                    }
                    self.frames.push(Frame::new(next_start, self.digits, self.dict));
                }
                None => {
                    // Backtrack: this position is exhausted.
                    self.frames.pop();
                    self.path.pop();
                }
            }
        }
    }
}

/// Collect solutions for `digits`, stopping at whichever of `limits` is hit first.
#[must_use]
pub fn translate_with_limits<'d>(digits: &[u8], dict: &'d Dictionary, limits: &Limits) -> TranslateResult<'d> {
    let mut translations = translate(digits, dict);
    if let Some(limit) = limits.time_budget {
        translations = translations.with_budget(TimeBudget::new(limit));
    }

    let max_solutions = limits.max_solutions.unwrap_or(usize::MAX);
    let mut solutions = Vec::new();
    while solutions.len() < max_solutions {
        let Some(solution) = translations.next() else {
            break;
        };
        solutions.push(solution);
    }

    let status = match translations.elapsed() {
        Some(elapsed) if translations.timed_out() => TranslateStatus::TimedOut { elapsed },
        _ if solutions.len() >= max_solutions => TranslateStatus::FoundEnough,
        _ => TranslateStatus::Exhausted,
    };

    TranslateResult { solutions, status }
}

/// Pair each solution with the phone number's original text, ready for output.
pub fn translate_number<'n, 'd>(
    number: &'n PhoneNumber,
    dict: &'d Dictionary,
) -> impl Iterator<Item = (&'n str, Solution<'d>)> {
    translate(&number.digits, dict).map(move |solution| (number.raw.as_str(), solution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::{DigitString, FilterMode};
    use crate::keypad::word_to_encoding;
    use crate::segment::format_solution;

    /// The classic sample word list.
    const SAMPLE_WORDS: &str = "an\nblau\nBo\"\nBoot\nbo\"s\nda\nFee\nfern\nFest\nfort\nje\njemand\nmir\nMix\nMixer\nName\nneu\no\"d\nOrt\nso\nTor\nTorf\nWasser\n";

    fn sample_dict() -> Dictionary {
        Dictionary::parse_from_str(SAMPLE_WORDS)
    }

    fn lines(raw: &str, dict: &Dictionary) -> Vec<String> {
        let digits = DigitString::from_phone_number(raw);
        translate(&digits, dict).map(|s| format_solution(raw, &s)).collect()
    }

    fn words_of(solution: &[Segment<'_>]) -> Vec<String> {
        solution.iter().map(ToString::to_string).collect()
    }

    /// Straightforward recursive version of the same rules, used as an oracle.
    fn reference<'d>(digits: &[u8], start: usize, dict: &'d Dictionary, path: &mut Vec<Segment<'d>>, out: &mut Vec<Solution<'d>>) {
        if start == digits.len() {
            out.push(path.clone());
            return;
        }
        let mut found_word = false;
        for end in start + 1..=digits.len() {
            for word in dict.lookup(&digits[start..end]) {
                found_word = true;
                path.push(Segment::Word(word));
                reference(digits, end, dict, path, out);
                path.pop();
            }
        }
        if !found_word && !path.last().is_some_and(Segment::is_digit) {
            path.push(Segment::Digit(digits[start]));
            reference(digits, start + 1, dict, path, out);
            path.pop();
        }
    }

    /// Coverage, adjacency, and suppression checks for one solution.
    fn assert_valid(digits: &[u8], dict: &Dictionary, solution: &[Segment<'_>]) {
        let covered: usize = solution.iter().map(Segment::digit_len).sum();
        assert_eq!(covered, digits.len());

        let reencoded: Vec<u8> = solution.iter().flat_map(|s| s.encoding().as_bytes().to_vec()).collect();
        assert_eq!(reencoded, digits);

        assert!(
            !solution.windows(2).any(|w| w[0].is_digit() && w[1].is_digit()),
            "adjacent digits in {solution:?}"
        );

        let mut pos = 0;
        for segment in solution {
            if segment.is_digit() {
                assert!(
                    (pos + 1..=digits.len()).all(|end| dict.lookup(&digits[pos..end]).is_empty()),
                    "digit used at {pos} although a word matches there"
                );
            }
            pos += segment.digit_len();
        }
    }

    #[test]
    fn test_single_letter_words() {
        let dict = Dictionary::build(["a", "i", "c", "b"]);
        let solutions: Vec<Vec<String>> = translate(b"56", &dict).map(|s| words_of(&s)).collect();
        assert_eq!(solutions, vec![vec!["a", "i"], vec!["a", "c"]]);
    }

    #[test]
    fn test_empty_dictionary_single_digit() {
        let dict = Dictionary::default();
        let solutions: Vec<_> = translate(b"7", &dict).collect();
        assert_eq!(solutions, vec![vec![Segment::Digit(b'7')]]);
    }

    #[test]
    fn test_empty_dictionary_two_digits_is_dead_end() {
        // the second position has no word and follows a digit
        let dict = Dictionary::default();
        assert_eq!(translate(b"23", &dict).count(), 0);
    }

    #[test]
    fn test_empty_digits_have_no_solutions() {
        let dict = sample_dict();
        assert_eq!(translate(b"", &dict).count(), 0);
        assert_eq!(translate(&DigitString::from_phone_number("--/"), &dict).count(), 0);
    }

    #[test]
    fn test_sample_numbers() {
        let dict = sample_dict();
        assert!(lines("112", &dict).is_empty());
        assert_eq!(lines("5624-82", &dict), vec!["5624-82: mir Tor", "5624-82: Mix Tor"]);
        assert_eq!(lines("4824", &dict), vec!["4824: Tor 4", "4824: fort", "4824: Torf"]);
        assert!(lines("0721/608-4067", &dict).is_empty());
        assert_eq!(
            lines("10/783--5", &dict),
            vec!["10/783--5: je Bo\" da", "10/783--5: je bo\"s 5", "10/783--5: neu o\"d 5"]
        );
        assert!(lines("1078-913-5", &dict).is_empty());
        assert_eq!(lines("381482", &dict), vec!["381482: so 1 Tor"]);
        assert_eq!(lines("04824", &dict), vec!["04824: 0 Tor 4", "04824: 0 fort", "04824: 0 Torf"]);
    }

    #[test]
    fn test_digit_suppressed_by_longer_prefix() {
        // "4" alone matches nothing, but "45" matches "fa", so the lone digit 4 is
        // never offered at position 0; once "fa" dead-ends, nothing is left
        let dict = Dictionary::build(["fa"]);
        assert_eq!(translate(b"459", &dict).count(), 1);
        let only: Vec<String> = translate(b"459", &dict).flat_map(|s| words_of(&s)).collect();
        assert_eq!(only, vec!["fa", "9"]);

        assert_eq!(translate(b"4599", &dict).count(), 0);
    }

    #[test]
    fn test_words_before_digits_and_word_order() {
        let dict = Dictionary::build(["Torf", "Tor", "fort"]);
        let solutions: Vec<Vec<String>> = translate(b"4824", &dict).map(|s| words_of(&s)).collect();
        // shorter prefix first, then word-list order within an encoding
        assert_eq!(solutions, vec![vec!["Tor", "4"], vec!["Torf"], vec!["fort"]]);
    }

    #[test]
    fn test_duplicate_words_give_duplicate_solutions() {
        let dict = Dictionary::build(["so", "so"]);
        assert_eq!(translate(b"38", &dict).count(), 2);
    }

    #[test]
    fn test_letterless_words_never_match() {
        let dict = Dictionary::build(["\"", "so"]);
        let solutions: Vec<Vec<String>> = translate(b"38", &dict).map(|s| words_of(&s)).collect();
        assert_eq!(solutions, vec![vec!["so"]]);
    }

    #[test]
    fn test_restartable() {
        let dict = sample_dict();
        let digits = DigitString::from_phone_number("10/783--5");
        let first: Vec<_> = translate(&digits, &dict).collect();
        let second: Vec<_> = translate(&digits, &dict).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_matches_recursive_reference() {
        let dict = Dictionary::build([
            "a", "m", "an", "je", "mir", "Mix", "Tor", "so", "da", "neu", "o\"d", "Ort", "Fee", "am",
        ]);
        for raw in ["5", "55", "5562482", "381482", "10783", "4824", "400562", "5158248", "99", "0", "9595", "55555555"] {
            let digits = DigitString::from_phone_number(raw);
            let mut expected = Vec::new();
            reference(&digits, 0, &dict, &mut Vec::new(), &mut expected);
            let actual: Vec<_> = translate(&digits, &dict).collect();
            assert_eq!(actual, expected, "mismatch for {raw}");
        }
    }

    #[test]
    fn test_solution_invariants_hold() {
        let dict = Dictionary::build(["a", "m", "an", "je", "mir", "Mix", "Tor", "so", "da", "neu", "Ort"]);
        for raw in ["5562482", "381482", "10783", "5158248", "9595", "3535", "824824", "55555555"] {
            let digits = DigitString::from_phone_number(raw);
            for solution in translate(&digits, &dict) {
                assert_valid(&digits, &dict, &solution);
            }
        }
    }

    #[test]
    fn test_long_number_does_not_overflow() {
        let dict = Dictionary::build(["a"]);
        let digits = vec![b'5'; 10_000];
        let solutions: Vec<_> = translate(&digits, &dict).collect();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].len(), 10_000);
    }

    #[test]
    fn test_limits_found_enough() {
        let dict = Dictionary::build(["a", "m"]);
        let limits = Limits { max_solutions: Some(5), time_budget: None };
        let result = translate_with_limits(b"55555", &dict, &limits);
        assert_eq!(result.solutions.len(), 5);
        assert_eq!(result.status, TranslateStatus::FoundEnough);
    }

    #[test]
    fn test_limits_exhausted() {
        let dict = Dictionary::build(["a", "m"]);
        let result = translate_with_limits(b"555", &dict, &Limits::default());
        assert_eq!(result.solutions.len(), 8);
        assert_eq!(result.status, TranslateStatus::Exhausted);
        assert_eq!(result.into_iter().count(), 8);
    }

    #[test]
    fn test_zero_budget_times_out() {
        // 2^40 solutions; only the budget can stop this
        let dict = Dictionary::build(["a", "m"]);
        let digits = vec![b'5'; 40];
        let limits = Limits { max_solutions: None, time_budget: Some(Duration::ZERO) };
        let result = translate_with_limits(&digits, &dict, &limits);
        assert!(matches!(result.status, TranslateStatus::TimedOut { .. }));
        assert!(result.solutions.len() < 1_000);
    }

    #[test]
    fn test_generous_budget_does_not_time_out() {
        let dict = sample_dict();
        let mut translations = translate(b"107835", &dict).with_budget(TimeBudget::new(Duration::from_secs(60)));
        assert_eq!(translations.by_ref().count(), 3);
        assert!(!translations.timed_out());
        assert!(translations.elapsed().is_some());
    }

    #[test]
    fn test_translate_number_pairs_raw_text() {
        let dict = sample_dict();
        let number = PhoneNumber::new("5624-82", FilterMode::MapLetters);
        let records: Vec<(&str, Vec<String>)> =
            translate_number(&number, &dict).map(|(raw, s)| (raw, words_of(&s))).collect();
        assert_eq!(
            records,
            vec![("5624-82", vec!["mir".to_string(), "Tor".to_string()]), ("5624-82", vec!["Mix".to_string(), "Tor".to_string()])]
        );
    }

    #[test]
    fn test_letters_in_number_are_mapped() {
        let dict = sample_dict();
        // "so" typed as letters, then digits
        let digits = DigitString::from_phone_number("SO1-482");
        let solutions: Vec<Vec<String>> = translate(&digits, &dict).map(|s| words_of(&s)).collect();
        assert_eq!(solutions, vec![vec!["so", "1", "Tor"]]);
        assert_eq!(word_to_encoding("so").as_bytes(), &digits[..2]);
    }
}
