//! Leaderboard ranking rules
//!
//! The stored list is append-only; these functions derive the same-day view:
//! filter to the date, collapse each name (case-insensitive, trimmed) to its
//! best entry, then sort by score descending with name as tiebreak.

use super::records::LeaderboardEntry;
use rustc_hash::FxHashMap;

/// Rows shown on the board
pub const TOP_N: usize = 10;

/// Canonical form of a player name for deduplication
///
/// Blank names collapse to "guest", as the reference does.
#[must_use]
pub fn name_key(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "guest".to_string()
    } else {
        trimmed.to_lowercase()
    }
}

/// Deduplicated standings for one date, best score per name, sorted
///
/// Earlier entries win ties within a name (strictly-greater replacement).
#[must_use]
pub fn standings<'a>(entries: &'a [LeaderboardEntry], date_key: &str) -> Vec<&'a LeaderboardEntry> {
    let mut best_by_name: FxHashMap<String, &LeaderboardEntry> = FxHashMap::default();
    for entry in entries.iter().filter(|e| e.date == date_key) {
        let key = name_key(&entry.name);
        match best_by_name.get(&key) {
            Some(current) if entry.score <= current.score => {}
            _ => {
                best_by_name.insert(key, entry);
            }
        }
    }

    let mut rows: Vec<&LeaderboardEntry> = best_by_name.into_values().collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    rows
}

/// 1-based rank of a name in the date's deduplicated standings
#[must_use]
pub fn rank_of(entries: &[LeaderboardEntry], date_key: &str, name: &str) -> Option<usize> {
    let key = name_key(name);
    standings(entries, date_key)
        .iter()
        .position(|e| name_key(&e.name) == key)
        .map(|i| i + 1)
}
