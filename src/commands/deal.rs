//! Deal command: the day's rack and the best-word hint

use crate::core::{PuzzleDate, TileSet};
use crate::dictionary::Dictionary;
use crate::engine::{BestWord, PuzzleSession};

/// Everything the host needs to render a dealt rack
pub struct DealResult {
    pub date_key: String,
    pub seed: u32,
    /// Rack letters in deal order, paired with their point values
    pub tiles: Vec<(char, u32)>,
    /// Best possible word from the loaded dictionary, if any fits
    pub best: Option<BestWord>,
    pub dictionary_size: usize,
    pub dictionary_limited: bool,
}

/// Deal the rack for a date and look up the best possible word
#[must_use]
pub fn deal_rack(tiles: &TileSet, date: &PuzzleDate, dictionary: &Dictionary) -> DealResult {
    let session = PuzzleSession::new(tiles, date);
    let rack_tiles = session
        .rack()
        .letters()
        .iter()
        .map(|&letter| (letter, tiles.points(letter)))
        .collect();

    DealResult {
        date_key: session.date_key().to_string(),
        seed: session.seed(),
        tiles: rack_tiles,
        best: session.best_word(dictionary),
        dictionary_size: dictionary.len(),
        dictionary_limited: dictionary.is_limited(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_reports_rack_with_points() {
        let tiles = TileSet::icelandic();
        let result = deal_rack(
            &tiles,
            &PuzzleDate::new(2024, 1, 1),
            &Dictionary::new(Vec::<String>::new()),
        );

        assert_eq!(result.date_key, "2024-01-01");
        assert_eq!(result.seed, 1_395_918_025);
        assert_eq!(
            result.tiles,
            vec![
                ('A', 1),
                ('X', 10),
                ('U', 2),
                ('Í', 4),
                ('Þ', 7),
                ('G', 3),
                ('I', 1)
            ]
        );
        assert!(result.best.is_none());
    }

    #[test]
    fn deal_surfaces_best_word_and_dictionary_info() {
        let tiles = TileSet::icelandic();
        let dict = Dictionary::new(["AX", "GIG"]);
        let result = deal_rack(&tiles, &PuzzleDate::new(2024, 1, 1), &dict);

        assert_eq!(result.best.unwrap().word, "AX");
        assert_eq!(result.dictionary_size, 2);
        assert!(!result.dictionary_limited);
    }

    #[test]
    fn demo_dictionary_is_flagged_limited() {
        let tiles = TileSet::icelandic();
        let result = deal_rack(&tiles, &PuzzleDate::new(2024, 1, 1), &Dictionary::demo());
        assert!(result.dictionary_limited);
    }
}
