//! Board command: the day's deduplicated standings

use crate::core::PuzzleDate;
use crate::persist::{LeaderboardEntry, Store, standings};
use std::io;

/// The day's standings, deduplicated and sorted, all rows
pub struct BoardResult {
    pub date_key: String,
    pub rows: Vec<LeaderboardEntry>,
}

/// Load the store and derive the standings for a date
///
/// # Errors
/// Returns an I/O error if the scoreboard cannot be read.
pub fn show_board(store: &Store, date: &PuzzleDate) -> io::Result<BoardResult> {
    let date_key = date.key();
    let entries = store.load_scoreboard()?;
    let rows = standings(&entries, &date_key)
        .into_iter()
        .cloned()
        .collect();
    Ok(BoardResult { date_key, rows })
}
