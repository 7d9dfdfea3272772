//! Share command: the shareable result text

use crate::core::PuzzleDate;
use crate::persist::{PlayRecord, Store};
use std::io;

/// Render the share text for a saved play
///
/// Matches the reference format line for line; results shared elsewhere
/// stay comparable.
#[must_use]
pub fn share_text(date_key: &str, record: &PlayRecord, dictionary_limited: bool) -> String {
    let dict_tag = if dictionary_limited { " (no dict)" } else { "" };
    format!(
        "Daily Rack — {date_key}\nRack: {}\nWord: {} = {}{dict_tag}\n#dailyrack",
        record.rack.join(" "),
        record.word,
        record.score,
    )
}

/// Build the share text for a date's saved play, `None` if nothing is saved
///
/// # Errors
/// Returns an I/O error if the store cannot be read.
pub fn share(
    store: &Store,
    date: &PuzzleDate,
    dictionary_limited: bool,
) -> io::Result<Option<String>> {
    let date_key = date.key();
    Ok(store
        .load_play(&date_key)?
        .map(|record| share_text(&date_key, &record, dictionary_limited)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PlayRecord {
        PlayRecord::new("ÞAU", 10, &['A', 'X', 'U', 'Í', 'Þ', 'G', 'I'])
    }

    #[test]
    fn share_text_matches_reference_format() {
        let text = share_text("2024-01-01", &record(), false);
        assert_eq!(
            text,
            "Daily Rack — 2024-01-01\nRack: A X U Í Þ G I\nWord: ÞAU = 10\n#dailyrack"
        );
    }

    #[test]
    fn limited_dictionary_is_tagged() {
        let text = share_text("2024-01-01", &record(), true);
        assert!(text.contains("ÞAU = 10 (no dict)"));
    }

    #[test]
    fn share_requires_a_saved_play() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("data"));
        let date = PuzzleDate::new(2024, 1, 1);

        assert_eq!(share(&store, &date, false).unwrap(), None);

        store.save_play("2024-01-01", &record()).unwrap();
        let text = share(&store, &date, false).unwrap().unwrap();
        assert!(text.starts_with("Daily Rack — 2024-01-01"));
    }
}
