//! Daily Rack
//!
//! A single-player daily word puzzle engine: a deterministic rack of seven
//! letters is dealt per calendar date, words are scored against a points
//! table with a bonus for using all seven tiles, and results feed a
//! same-day leaderboard.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_rack::core::{PuzzleDate, TileSet};
//! use daily_rack::dictionary::Dictionary;
//! use daily_rack::engine::PuzzleSession;
//!
//! let tiles = TileSet::icelandic();
//! let mut session = PuzzleSession::new(&tiles, &PuzzleDate::new(2024, 1, 1));
//!
//! // Same date, same rack - everywhere, with no server
//! println!("Rack: {}", session.rack());
//!
//! let dictionary = Dictionary::demo();
//! let outcome = session.submit("game", &dictionary);
//! println!("Score: {:?}", outcome.score());
//! ```

// Core domain types
pub mod core;

// Draw, scoring, feasibility, session
pub mod engine;

// Word-validity oracle
pub mod dictionary;

// Saved plays and the leaderboard
pub mod persist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
