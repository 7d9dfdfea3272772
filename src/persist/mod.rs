//! Persisted state: record schema, leaderboard rules, and the file store
//!
//! The schema matches the reference implementation's JSON payloads so saved
//! plays and scoreboards stay compatible.

pub mod leaderboard;
mod records;
mod store;

pub use leaderboard::{TOP_N, name_key, rank_of, standings};
pub use records::{LeaderboardEntry, PlayRecord};
pub use store::Store;
