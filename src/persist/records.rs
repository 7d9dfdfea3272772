//! Persisted record schema
//!
//! These shapes are a compatibility surface: they match the JSON payloads
//! existing installations already hold, field for field.

use serde::{Deserialize, Serialize};

/// One day's saved play: the submitted word, its score, and the rack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub word: String,
    pub score: u32,
    /// One string per tile, in deal order
    pub rack: Vec<String>,
}

impl PlayRecord {
    /// Build a record from the engine's types
    #[must_use]
    pub fn new(word: impl Into<String>, score: u32, rack: &[char]) -> Self {
        Self {
            word: word.into(),
            score,
            rack: rack.iter().map(char::to_string).collect(),
        }
    }
}

/// One leaderboard submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub word: String,
    pub score: u32,
    /// Canonical `YYYY-MM-DD` key of the puzzle the entry belongs to
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Submission time, epoch milliseconds
    pub ts: i64,
}
