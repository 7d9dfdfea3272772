//! Feasibility check: can a word be spelled from a rack?
//!
//! A multiset-subset test, not a substring or anagram test. Each rack tile
//! may be used at most once; letter order is irrelevant here (what the word
//! means is the dictionary gate's concern).

use rustc_hash::FxHashMap;

/// Per-letter usage counts of a sequence of letters
#[must_use]
pub fn letter_counts<I: IntoIterator<Item = char>>(letters: I) -> FxHashMap<char, u32> {
    let mut counts = FxHashMap::default();
    for letter in letters {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

/// Whether `word` can be formed from `rack`, using each tile at most once
///
/// True iff for every distinct letter in the word, the word needs no more
/// copies than the rack holds.
///
/// # Examples
/// ```
/// use daily_rack::engine::is_feasible;
///
/// let rack = ['A', 'A', 'B', 'C', 'D', 'E', 'F'];
/// assert!(is_feasible("AAB", &rack));
/// assert!(!is_feasible("AAA", &rack)); // only two A's available
/// ```
#[must_use]
pub fn is_feasible(word: &str, rack: &[char]) -> bool {
    let need = letter_counts(word.chars());
    let have = letter_counts(rack.iter().copied());
    need.iter()
        .all(|(letter, count)| have.get(letter).copied().unwrap_or(0) >= *count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RACK: [char; 7] = ['A', 'A', 'B', 'C', 'D', 'E', 'F'];

    #[test]
    fn word_within_counts_is_feasible() {
        assert!(is_feasible("AAB", &RACK));
        assert!(is_feasible("FACADE", &RACK));
        assert!(is_feasible("BAD", &RACK));
    }

    #[test]
    fn word_exceeding_counts_is_not_feasible() {
        assert!(!is_feasible("AAA", &RACK));
        assert!(!is_feasible("BB", &RACK));
    }

    #[test]
    fn letter_absent_from_rack_is_not_feasible() {
        assert!(!is_feasible("AXE", &RACK));
        assert!(!is_feasible("Z", &RACK));
    }

    #[test]
    fn empty_word_is_trivially_feasible() {
        assert!(is_feasible("", &RACK));
        assert!(is_feasible("", &[]));
    }

    #[test]
    fn order_is_irrelevant() {
        assert!(is_feasible("FEDCBAA", &RACK));
        assert!(is_feasible("AABCDEF", &RACK));
    }

    #[test]
    fn whole_rack_is_feasible() {
        let word: String = RACK.iter().collect();
        assert!(is_feasible(&word, &RACK));
    }

    #[test]
    fn feasibility_handles_diacritics() {
        let rack = ['Á', 'Ð', 'Þ', 'Æ', 'Ö', 'A', 'A'];
        assert!(is_feasible("ÆÐA", &rack));
        assert!(!is_feasible("ÆÆ", &rack));
    }

    #[test]
    fn letter_counts_counts_duplicates() {
        let counts = letter_counts("AABAC".chars());
        assert_eq!(counts.get(&'A'), Some(&3));
        assert_eq!(counts.get(&'B'), Some(&1));
        assert_eq!(counts.get(&'C'), Some(&1));
        assert_eq!(counts.get(&'D'), None);
    }
}
