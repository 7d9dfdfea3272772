//! Letter model: point values and bag counts for the fixed alphabet
//!
//! The tile set is the Icelandic Skrafl "new" distribution (Netskrafl, no
//! blanks): 32 letters, 98 tiles. Tables are process-wide immutable
//! configuration; a `TileSet` validates them once at startup.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of tiles dealt to a rack
pub const RACK_SIZE: usize = 7;

/// Bonus awarded when a word uses all seven rack tiles
pub const BINGO_BONUS: u32 = 50;

/// Point value per letter
pub const LETTER_POINTS: &[(char, u32)] = &[
    ('A', 1),
    ('Á', 3),
    ('B', 5),
    ('D', 5),
    ('Ð', 2),
    ('E', 3),
    ('É', 7),
    ('F', 3),
    ('G', 3),
    ('H', 4),
    ('I', 1),
    ('Í', 4),
    ('J', 6),
    ('K', 2),
    ('L', 2),
    ('M', 2),
    ('N', 1),
    ('O', 5),
    ('Ó', 3),
    ('P', 5),
    ('R', 1),
    ('S', 1),
    ('T', 2),
    ('U', 2),
    ('Ú', 4),
    ('V', 5),
    ('X', 10),
    ('Y', 6),
    ('Ý', 5),
    ('Þ', 7),
    ('Æ', 4),
    ('Ö', 6),
];

/// Tile count per letter in one full bag
///
/// Order matters: the bag is expanded in this order, and deterministic racks
/// depend on the expansion order staying fixed.
pub const LETTER_COUNTS: &[(char, u32)] = &[
    ('A', 11),
    ('Á', 2),
    ('B', 1),
    ('D', 1),
    ('Ð', 4),
    ('E', 3),
    ('É', 1),
    ('F', 3),
    ('G', 3),
    ('H', 1),
    ('I', 7),
    ('Í', 1),
    ('J', 1),
    ('K', 4),
    ('L', 5),
    ('M', 3),
    ('N', 7),
    ('O', 1),
    ('Ó', 2),
    ('P', 1),
    ('R', 8),
    ('S', 7),
    ('T', 6),
    ('U', 6),
    ('Ú', 1),
    ('V', 1),
    ('X', 1),
    ('Y', 1),
    ('Ý', 1),
    ('Þ', 1),
    ('Æ', 2),
    ('Ö', 1),
];

/// Error type for malformed tile configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileSetError {
    /// Total tile count is smaller than the rack size
    BagTooSmall { total: usize, rack_size: usize },
    /// A letter is configured with a zero tile count
    ZeroCount(char),
}

impl fmt::Display for TileSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BagTooSmall { total, rack_size } => {
                write!(f, "Bag holds {total} tiles, need at least {rack_size}")
            }
            Self::ZeroCount(letter) => write!(f, "Letter '{letter}' has a zero tile count"),
        }
    }
}

impl std::error::Error for TileSetError {}

/// Validated tile configuration: the alphabet, point values, and bag counts
///
/// Immutable after construction. Lookups never fail: letters outside the
/// alphabet score 0 and have a bag count of 0.
#[derive(Debug, Clone)]
pub struct TileSet {
    points: FxHashMap<char, u32>,
    counts: Vec<(char, u32)>,
    bag_size: usize,
}

impl TileSet {
    /// Create a tile set from point and count tables
    ///
    /// The count table's order is preserved; it defines bag expansion order.
    ///
    /// # Errors
    /// Returns `TileSetError` if any count is zero or the total tile count is
    /// below [`RACK_SIZE`]. A malformed table is a startup configuration
    /// error, never a per-draw condition.
    pub fn new(points: &[(char, u32)], counts: &[(char, u32)]) -> Result<Self, TileSetError> {
        let mut total = 0usize;
        for &(letter, count) in counts {
            if count == 0 {
                return Err(TileSetError::ZeroCount(letter));
            }
            total += count as usize;
        }
        if total < RACK_SIZE {
            return Err(TileSetError::BagTooSmall {
                total,
                rack_size: RACK_SIZE,
            });
        }

        Ok(Self {
            points: points.iter().copied().collect(),
            counts: counts.to_vec(),
            bag_size: total,
        })
    }

    /// The standard Icelandic tile set (32 letters, 98 tiles)
    ///
    /// # Panics
    /// Will not panic - the built-in tables are statically valid.
    #[must_use]
    pub fn icelandic() -> Self {
        Self::new(LETTER_POINTS, LETTER_COUNTS).expect("built-in tile tables are valid")
    }

    /// Point value of a letter, 0 if the letter is not in the table
    #[inline]
    #[must_use]
    pub fn points(&self, letter: char) -> u32 {
        self.points.get(&letter).copied().unwrap_or(0)
    }

    /// Tile count of a letter in one full bag, 0 if absent
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts
            .iter()
            .find(|&&(l, _)| l == letter)
            .map_or(0, |&(_, c)| c)
    }

    /// Whether a character belongs to the alphabet
    #[inline]
    #[must_use]
    pub fn is_letter(&self, ch: char) -> bool {
        self.points.contains_key(&ch)
    }

    /// Total number of tiles in one full bag
    #[inline]
    #[must_use]
    pub const fn bag_size(&self) -> usize {
        self.bag_size
    }

    /// The count table in bag expansion order
    #[inline]
    #[must_use]
    pub fn tile_counts(&self) -> &[(char, u32)] {
        &self.counts
    }
}
