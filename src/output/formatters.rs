//! Formatting utilities for terminal output

/// Format one rack tile as letter + points
#[must_use]
pub fn tile(letter: char, points: u32) -> String {
    format!("[{letter} {points}]")
}

/// Format a whole rack line from (letter, points) pairs
#[must_use]
pub fn rack_line(tiles: &[(char, u32)]) -> String {
    tiles
        .iter()
        .map(|&(letter, points)| tile(letter, points))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Medal for a 1-based rank, top three only
#[must_use]
pub const fn medal(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}
