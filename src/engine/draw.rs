//! Bag & draw engine: deterministic rack dealing
//!
//! The bag is the count table expanded into one entry per physical tile, in
//! table order. Seven tiles are drawn without replacement using the seeded
//! PRNG; the bag never escapes the draw.

use crate::core::{Mulberry32, RACK_SIZE, TileSet};
use std::fmt;

/// The seven letters dealt for one day
///
/// The set of available letters is immutable after the deal; submissions are
/// always checked against the full rack, and display shuffles operate on a
/// copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    letters: [char; RACK_SIZE],
}

impl Rack {
    /// The letters in deal order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; RACK_SIZE] {
        &self.letters
    }

    /// A display-order copy shuffled by the given stream
    ///
    /// Fisher-Yates with `j = floor(rnd() * (i + 1))`, matching the reference
    /// shuffle. Passing the same stream again continues it, so repeated
    /// shuffles keep varying.
    #[must_use]
    pub fn display_shuffle(&self, rng: &mut Mulberry32) -> [char; RACK_SIZE] {
        let mut shuffled = self.letters;
        shuffle_in_place(&mut shuffled, rng);
        shuffled
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Deal the rack for a seed
///
/// Fully determined by the seed: expand the bag in table order, then draw
/// [`RACK_SIZE`] indices via `floor(rnd() * bag_len)`, removing each drawn
/// tile. The tile set guarantees the bag is large enough at construction.
#[must_use]
pub fn deal(tiles: &TileSet, seed: u32) -> Rack {
    let mut rng = Mulberry32::new(seed);
    let mut bag = build_bag(tiles);

    let mut letters = [' '; RACK_SIZE];
    for slot in &mut letters {
        let idx = rng.next_index(bag.len());
        *slot = bag.remove(idx);
    }

    Rack { letters }
}

/// Expand the count table into one bag entry per tile, in table order
fn build_bag(tiles: &TileSet) -> Vec<char> {
    let mut bag = Vec::with_capacity(tiles.bag_size());
    for &(letter, count) in tiles.tile_counts() {
        for _ in 0..count {
            bag.push(letter);
        }
    }
    bag
}

/// Fisher-Yates shuffle driven by the given stream
pub fn shuffle_in_place(letters: &mut [char], rng: &mut Mulberry32) {
    for i in (1..letters.len()).rev() {
        let j = rng.next_index(i + 1);
        letters.swap(i, j);
    }
}
