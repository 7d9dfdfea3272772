//! Puzzle session: the day's rack and the submission pipeline
//!
//! A session owns the date key, seed, and dealt rack. Submissions are
//! repeatable - tiles are never consumed, so every candidate is checked
//! against the full original rack. Rejections are values handed back to the
//! host, not errors.

use crate::core::{Mulberry32, PuzzleDate, RACK_SIZE, TileSet};
use crate::dictionary::{Dictionary, normalize};
use crate::engine::draw::{Rack, deal};
use crate::engine::feasibility::is_feasible;
use crate::engine::scoring::{ScoreBreakdown, breakdown, score_word};
use std::fmt;

/// Lifecycle of a puzzle session
///
/// `NotStarted` only exists before the deal; a constructed session is
/// already at `RackDealt`. There is no terminal state - submissions stay
/// allowed after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    RackDealt,
    Scored,
}

/// Why a candidate word was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The word contains a character outside the alphabet
    InvalidCharacters,
    /// The word cannot be spelled from the rack, or is not in the dictionary
    NotFeasible,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacters => write!(f, "Word contains letters outside the tile set"),
            Self::NotFeasible => write!(f, "Not a valid word for this rack"),
        }
    }
}

/// Outcome of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The word is feasible and in the dictionary; breakdown included
    Accepted { breakdown: ScoreBreakdown },
    Rejected(Rejection),
}

impl Submission {
    /// The score when accepted
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        match self {
            Self::Accepted { breakdown } => Some(breakdown.total()),
            Self::Rejected(_) => None,
        }
    }
}

/// The best word a dictionary offers for a rack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestWord {
    pub word: String,
    pub score: u32,
}

/// One day's puzzle: date key, seed, and the dealt rack
///
/// The rack is immutable after the deal; multiple sessions in one process
/// share nothing but the read-only tile set.
#[derive(Debug, Clone)]
pub struct PuzzleSession<'a> {
    tiles: &'a TileSet,
    date_key: String,
    seed: u32,
    shuffle_seed: u32,
    rack: Rack,
    state: SessionState,
}

impl<'a> PuzzleSession<'a> {
    /// Deal the session for a date
    #[must_use]
    pub fn new(tiles: &'a TileSet, date: &PuzzleDate) -> Self {
        let seed = date.seed();
        Self {
            tiles,
            date_key: date.key(),
            seed,
            shuffle_seed: date.shuffle_seed(),
            rack: deal(tiles, seed),
            state: SessionState::RackDealt,
        }
    }

    /// The canonical `YYYY-MM-DD` key this session was dealt for
    #[inline]
    #[must_use]
    pub fn date_key(&self) -> &str {
        &self.date_key
    }

    /// The seed that produced the rack
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// The day's rack
    #[inline]
    #[must_use]
    pub const fn rack(&self) -> &Rack {
        &self.rack
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// A fresh generator for display-only shuffling of this session's rack
    ///
    /// Seeded from the salted stream, so shuffles never disturb or reveal
    /// the draw sequence.
    #[must_use]
    pub const fn shuffle_rng(&self) -> Mulberry32 {
        Mulberry32::new(self.shuffle_seed)
    }

    /// Submit a candidate word against the rack and a dictionary
    ///
    /// Repeatable: feasibility is always checked against the full rack, and
    /// a rejection mutates nothing. The word is normalized before checking.
    pub fn submit(&mut self, word: &str, dictionary: &Dictionary) -> Submission {
        let word = normalize(word);

        if !word.chars().all(|c| self.tiles.is_letter(c)) {
            return Submission::Rejected(Rejection::InvalidCharacters);
        }
        if !is_feasible(&word, self.rack.letters()) || !dictionary.contains(&word) {
            return Submission::Rejected(Rejection::NotFeasible);
        }

        self.state = SessionState::Scored;
        Submission::Accepted {
            breakdown: breakdown(self.tiles, &word),
        }
    }

    /// Highest-scoring feasible dictionary word for this rack
    ///
    /// Scans every word of at most rack length; ties resolve to the
    /// lexicographically smaller word so the result is stable regardless of
    /// set iteration order. `None` when nothing fits.
    #[must_use]
    pub fn best_word(&self, dictionary: &Dictionary) -> Option<BestWord> {
        let mut best: Option<BestWord> = None;
        for word in dictionary.iter() {
            if word.chars().count() > RACK_SIZE {
                continue;
            }
            if !is_feasible(word, self.rack.letters()) {
                continue;
            }
            let score = score_word(self.tiles, word);
            let better = match &best {
                None => true,
                Some(b) => score > b.score || (score == b.score && word < b.word.as_str()),
            };
            if better {
                best = Some(BestWord {
                    word: word.to_string(),
                    score,
                });
            }
        }
        best
    }
}
