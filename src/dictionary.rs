//! `dictionary` — the word list, indexed by keypad encoding.
//!
//! Words are read one per line (from a file, or from an in-memory string for
//! WebAssembly builds where there is no filesystem). Nothing is normalized, sorted,
//! or deduplicated: the text of each word is echoed
//! verbatim in solutions, and the order of words sharing an encoding decides the
//! order in which solutions are produced.
//!
//! Words that contain no letters at all (e.g. a stray `"` line) encode to the empty
//! sequence. They are kept under the empty encoding so the word count stays honest,
//! but they can never match, since the translator only looks up non-empty digit runs.

use std::collections::HashMap;

use log::debug;

use crate::keypad::{word_to_encoding, Encoding};

/// Encoding → words lookup, built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Words per encoding, in word-list order (duplicates preserved).
    index: HashMap<Encoding, Vec<String>>,
    num_words: usize,
    max_encoding_len: usize,
}

impl Dictionary {
    /// Index `words` in the order given.
    pub fn build<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index: HashMap<Encoding, Vec<String>> = HashMap::new();
        let mut num_words = 0;
        let mut max_encoding_len = 0;

        for word in words {
            let word = word.into();
            let encoding = word_to_encoding(&word);
            if encoding.is_empty() {
                debug!("word {word:?} has no letters; it can never match");
            }
            max_encoding_len = max_encoding_len.max(encoding.len());
            index.entry(encoding).or_insert_with(|| Vec::with_capacity(1)).push(word);
            num_words += 1;
        }

        Dictionary { index, num_words, max_encoding_len }
    }

    /// Words whose encoding is exactly `digits`, or an empty slice.
    #[must_use]
    pub fn lookup(&self, digits: &[u8]) -> &[String] {
        self.index.get(digits).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Parse a newline-separated word list.
    ///
    /// Each line is trimmed; empty lines are skipped. Everything else is kept
    /// exactly as written (case, quotes, hyphens).
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Dictionary {
        Self::build(contents.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Dictionary> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Total words indexed, duplicates included.
    #[must_use]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// Distinct encodings.
    #[must_use]
    pub fn num_encodings(&self) -> usize {
        self.index.len()
    }

    /// Length of the longest encoding; no digit run longer than this can match.
    #[must_use]
    pub fn max_encoding_len(&self) -> usize {
        self.max_encoding_len
    }

    /// Words that encode to nothing and therefore never appear in a solution.
    #[must_use]
    pub fn empty_encoding_words(&self) -> &[String] {
        self.lookup(&[])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_groups_by_encoding() {
        let dict = Dictionary::build(["mir", "Mix", "Tor", "Mixer"]);
        assert_eq!(dict.lookup(b"562"), ["mir", "Mix"]);
        assert_eq!(dict.lookup(b"482"), ["Tor"]);
        assert_eq!(dict.lookup(b"56202"), ["Mixer"]);
        assert_eq!(dict.num_words(), 4);
        assert_eq!(dict.num_encodings(), 3);
        assert_eq!(dict.max_encoding_len(), 5);
    }

    #[test]
    fn test_lookup_missing_is_empty() {
        let dict = Dictionary::build(["an"]);
        assert!(dict.lookup(b"5").is_empty());
        assert!(dict.lookup(b"").is_empty());
    }

    #[test]
    fn test_insertion_order_and_duplicates_kept() {
        let dict = Dictionary::build(["Torf", "fort", "Torf"]);
        assert_eq!(dict.lookup(b"4824"), ["Torf", "fort", "Torf"]);
        assert_eq!(dict.num_words(), 3);
    }

    #[test]
    fn test_letterless_words_are_inert() {
        let dict = Dictionary::build(["\"", "--", "an"]);
        assert_eq!(dict.empty_encoding_words(), ["\"", "--"]);
        assert_eq!(dict.num_words(), 3);
        assert_eq!(dict.num_encodings(), 2);
    }

    #[test]
    fn test_parse_from_str() {
        let dict = Dictionary::parse_from_str("an\r\n\n  blau  \nBo\"\n");
        assert_eq!(dict.num_words(), 3);
        assert_eq!(dict.lookup(b"51"), ["an"]);
        assert_eq!(dict.lookup(b"7857"), ["blau"]);
        assert_eq!(dict.lookup(b"78"), ["Bo\""]);
    }

    #[test]
    fn test_parse_empty() {
        let dict = Dictionary::parse_from_str("");
        assert!(dict.is_empty());
        assert_eq!(dict.num_encodings(), 0);
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let err = Dictionary::load_from_path("/no/such/words.txt").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("/no/such/words.txt"));
    }

    #[test]
    fn test_dictionary_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dictionary>();
    }
}
