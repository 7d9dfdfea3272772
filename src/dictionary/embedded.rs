//! Embedded fallback word list
//!
//! A tiny demo list so the game runs with no dictionary file loaded.
//! A dictionary built from it is flagged as limited.

/// Demo fallback words
pub const DEMO_WORDS: &[&str] = &[
    "TREE", "STEAM", "CRANE", "STARE", "TIRES", "NOTES", "STONE", "RAINS", "TRAIN", "PASTE",
    "PAINT", "POINT", "PRIZE", "QUIET", "NOISE", "CLOUD", "HONEY", "FUN", "GAME", "WORD", "RACK",
    "TILES", "SCORE", "BONUS",
];

/// Number of words in `DEMO_WORDS`
pub const DEMO_WORDS_COUNT: usize = 24;
