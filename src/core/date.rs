//! Date seeding: calendar date → canonical key → 32-bit seed
//!
//! The same calendar date must yield the same seed everywhere, with no
//! server coordination: format the date as `YYYY-MM-DD` and FNV-1a hash the
//! bytes. A fixed salt derives a second, independent stream for
//! display-only shuffles so cosmetic randomness never leaks the draw stream.

use std::fmt;

/// Salt XORed into the seed for the display-shuffle stream
pub const SHUFFLE_SALT: u32 = 0xC0_FFEE;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// A calendar date in the player's local timezone
///
/// Plain data; the engine never reads the clock. Hosts supply
/// year/month/day (the CLI uses chrono for "today").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleDate {
    year: i32,
    month: u32,
    day: u32,
}

impl PuzzleDate {
    /// Create a date from year, month (1-12), day (1-31)
    #[inline]
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Canonical zero-padded `YYYY-MM-DD` key
    ///
    /// # Examples
    /// ```
    /// use daily_rack::core::PuzzleDate;
    ///
    /// assert_eq!(PuzzleDate::new(2024, 1, 15).key(), "2024-01-15");
    /// ```
    #[must_use]
    pub fn key(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Deterministic 32-bit seed for this date's draw
    #[must_use]
    pub fn seed(&self) -> u32 {
        hash_key(&self.key())
    }

    /// Seed for the independent display-shuffle stream
    #[must_use]
    pub fn shuffle_seed(&self) -> u32 {
        self.seed() ^ SHUFFLE_SALT
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// FNV-1a hash of a date key's bytes, as the reference implementation does it
///
/// Not cryptographic; collision resistance is not a goal, only stability.
#[must_use]
pub fn hash_key(key: &str) -> u32 {
    let mut h = FNV_OFFSET_BASIS;
    for &byte in key.as_bytes() {
        h ^= u32::from(byte);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}
