//! Dictionary gate: the external word-validity oracle
//!
//! A dictionary is an explicit value handed to the session at submission
//! time - there is no ambient global set. Words are held normalized
//! (trimmed, uppercased); inputs are expected in composed (NFC) form per the
//! host contract.

mod embedded;
pub mod loader;

pub use embedded::{DEMO_WORDS, DEMO_WORDS_COUNT};

use rustc_hash::FxHashSet;

/// Normalize a word for dictionary matching: trim and uppercase
///
/// Icelandic letters have single-codepoint composed forms, so uppercasing is
/// all the accent handling needed for NFC input.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

/// A set of valid words, matched after normalization
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
    limited: bool,
}

impl Dictionary {
    /// Build a dictionary from words, normalizing each entry
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words,
            limited: false,
        }
    }

    /// The embedded demo list, flagged as limited
    #[must_use]
    pub fn demo() -> Self {
        let mut dict = Self::new(DEMO_WORDS.iter().copied());
        dict.limited = true;
        dict
    }

    /// Whether a word is valid, after normalization
    ///
    /// # Examples
    /// ```
    /// use daily_rack::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::new(["rós"]);
    /// assert!(dict.contains("RÓS"));
    /// assert!(dict.contains(" rós "));
    /// assert!(!dict.contains("SÓL"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    /// Whether this is the limited fallback list rather than a real lexicon
    #[inline]
    #[must_use]
    pub const fn is_limited(&self) -> bool {
        self.limited
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the normalized words (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize("  rós "), "RÓS");
        assert_eq!(normalize("þæö"), "ÞÆÖ");
        assert_eq!(normalize("GAME"), "GAME");
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dict = Dictionary::new(["GAME", "rós"]);
        assert!(dict.contains("game"));
        assert!(dict.contains("GAME"));
        assert!(dict.contains("Rós"));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let dict = Dictionary::new(["GAME", "", "   "]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn duplicate_entries_collapse() {
        let dict = Dictionary::new(["PASTE", "paste", "PASTE"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn demo_dictionary_is_limited() {
        let dict = Dictionary::demo();
        assert!(dict.is_limited());
        assert_eq!(dict.len(), DEMO_WORDS_COUNT);
        assert!(dict.contains("game"));
    }

    #[test]
    fn explicit_dictionary_is_not_limited() {
        let dict = Dictionary::new(["GAME"]);
        assert!(!dict.is_limited());
    }
}
