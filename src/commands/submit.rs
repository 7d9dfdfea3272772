//! Submit command: validate, score, persist, rank

use crate::core::{PuzzleDate, TileSet};
use crate::dictionary::{Dictionary, normalize};
use crate::engine::{PuzzleSession, Submission};
use crate::persist::{LeaderboardEntry, PlayRecord, Store, rank_of};
use std::io;

/// Player input for one submission
pub struct SubmitConfig {
    pub word: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl SubmitConfig {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            name: "Guest".to_string(),
            avatar: None,
        }
    }
}

/// Outcome of a submission, with persistence side effects applied
pub struct SubmitResult {
    pub date_key: String,
    pub rack: Vec<char>,
    pub word: String,
    pub outcome: Submission,
    /// Rank on the day's deduplicated board, set only when accepted
    pub rank: Option<usize>,
}

/// Submit a word for a date: check it, and when accepted, save the play and
/// append a leaderboard entry
///
/// Rejections come back in the result, not as errors; nothing is persisted
/// for a rejected word.
///
/// # Errors
/// Returns an I/O error if the store cannot be read or written.
pub fn submit_word(
    tiles: &TileSet,
    date: &PuzzleDate,
    dictionary: &Dictionary,
    store: &Store,
    config: SubmitConfig,
) -> io::Result<SubmitResult> {
    let mut session = PuzzleSession::new(tiles, date);
    let word = normalize(&config.word);
    let outcome = session.submit(&word, dictionary);

    let mut rank = None;
    if let Submission::Accepted { breakdown } = &outcome {
        let score = breakdown.total();
        let record = PlayRecord::new(word.clone(), score, session.rack().letters());
        store.save_play(session.date_key(), &record)?;

        let name = if config.name.trim().is_empty() {
            "Guest".to_string()
        } else {
            config.name.trim().to_string()
        };
        let entries = store.append_entry(LeaderboardEntry {
            name: name.clone(),
            word: word.clone(),
            score,
            date: session.date_key().to_string(),
            avatar: config.avatar,
            ts: chrono::Utc::now().timestamp_millis(),
        })?;
        rank = rank_of(&entries, session.date_key(), &name);
    }

    Ok(SubmitResult {
        date_key: session.date_key().to_string(),
        rack: session.rack().letters().to_vec(),
        word,
        outcome,
        rank,
    })
}
