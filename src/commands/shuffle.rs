//! Shuffle command: a display-order view of the day's rack
//!
//! Cosmetic only - the salted stream keeps the underlying draw untouched and
//! unrevealed.

use crate::core::{PuzzleDate, TileSet};
use crate::engine::PuzzleSession;

/// A shuffled display order for the rack
pub struct ShuffleResult {
    pub date_key: String,
    pub letters: Vec<char>,
}

/// Shuffle the day's rack for display
#[must_use]
pub fn shuffle_rack(tiles: &TileSet, date: &PuzzleDate) -> ShuffleResult {
    let session = PuzzleSession::new(tiles, date);
    let mut rng = session.shuffle_rng();
    ShuffleResult {
        date_key: session.date_key().to_string(),
        letters: session.rack().display_shuffle(&mut rng).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::deal;

    #[test]
    fn shuffle_matches_the_salted_reference_stream() {
        let tiles = TileSet::icelandic();
        let result = shuffle_rack(&tiles, &PuzzleDate::new(2024, 1, 1));
        assert_eq!(result.date_key, "2024-01-01");
        assert_eq!(result.letters, vec!['G', 'X', 'Þ', 'Í', 'A', 'U', 'I']);
    }

    #[test]
    fn shuffle_is_a_permutation_of_the_rack() {
        let tiles = TileSet::icelandic();
        let date = PuzzleDate::new(2025, 3, 9);
        let result = shuffle_rack(&tiles, &date);

        let mut shuffled = result.letters.clone();
        let mut dealt = deal(&tiles, date.seed()).letters().to_vec();
        shuffled.sort_unstable();
        dealt.sort_unstable();
        assert_eq!(shuffled, dealt);
    }
}
