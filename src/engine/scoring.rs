//! Scoring engine: word score plus the bingo bonus
//!
//! A word's score is the sum of its letters' point values, plus a fixed
//! bonus when all seven rack tiles are used. The breakdown is the source of
//! truth: the total is always derived from the per-letter parts, so display
//! and score cannot drift apart.

use crate::core::{BINGO_BONUS, RACK_SIZE, TileSet};
use std::fmt;

/// Per-letter scoring breakdown for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    parts: Vec<(char, u32)>,
    bingo: bool,
}

impl ScoreBreakdown {
    /// Ordered `(letter, points)` pairs, one per letter of the word
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[(char, u32)] {
        &self.parts
    }

    /// Sum of the per-letter points, before any bonus
    #[must_use]
    pub fn base(&self) -> u32 {
        self.parts.iter().map(|&(_, p)| p).sum()
    }

    /// Whether the bingo bonus applied (word used all seven tiles)
    #[inline]
    #[must_use]
    pub const fn is_bingo(&self) -> bool {
        self.bingo
    }

    /// Bonus points awarded, 0 when no bingo
    #[must_use]
    pub const fn bonus(&self) -> u32 {
        if self.bingo { BINGO_BONUS } else { 0 }
    }

    /// Total score, derived from the parts and bonus flag
    #[must_use]
    pub fn total(&self) -> u32 {
        self.base() + self.bonus()
    }
}

impl fmt::Display for ScoreBreakdown {
    /// Formats like `G(3) + A(1) + M(2) + E(3) = 9`, with ` + Bingo 50`
    /// appended when the bonus applied
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (letter, points)) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{letter}({points})")?;
        }
        write!(f, " = {}", self.base())?;
        if self.bingo {
            write!(f, " + Bingo {BINGO_BONUS}")?;
        }
        Ok(())
    }
}

/// Compute the scoring breakdown of a word
///
/// Letters outside the alphabet contribute 0 points, never an error.
///
/// # Examples
/// ```
/// use daily_rack::core::TileSet;
/// use daily_rack::engine::breakdown;
///
/// let tiles = TileSet::icelandic();
/// let b = breakdown(&tiles, "GAME");
/// assert_eq!(b.total(), 9);
/// assert!(!b.is_bingo());
/// ```
#[must_use]
pub fn breakdown(tiles: &TileSet, word: &str) -> ScoreBreakdown {
    let parts: Vec<(char, u32)> = word.chars().map(|c| (c, tiles.points(c))).collect();
    let bingo = parts.len() == RACK_SIZE;
    ScoreBreakdown { parts, bingo }
}

/// Score of a word: letter points summed, plus the bingo bonus at 7 letters
#[must_use]
pub fn score_word(tiles: &TileSet, word: &str) -> u32 {
    breakdown(tiles, word).total()
}
