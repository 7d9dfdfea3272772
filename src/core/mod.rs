//! Core domain types for the daily rack puzzle
//!
//! This module contains the fundamental domain types with zero I/O: the
//! letter model, the seeded PRNG, and date seeding. Everything here is pure,
//! deterministic, and testable against reference values.

mod date;
mod letters;
mod rng;

pub use date::{PuzzleDate, SHUFFLE_SALT, hash_key};
pub use letters::{BINGO_BONUS, LETTER_COUNTS, LETTER_POINTS, RACK_SIZE, TileSet, TileSetError};
pub use rng::Mulberry32;
