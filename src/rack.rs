use rand::Rng;

use crate::letter::{InvalidLetter, Letter, Mask, LETTER_COUNT, LETTER_INFO};

/// A standard rack holds at most 7 tiles.
pub const MAX_RACK_SIZE: usize = 7;

/// Input token for a blank tile.
pub const WILDCARD: char = '_';

/// Blank tiles in the standard English bag.
pub const INITIAL_WILDCARDS: u8 = 2;

/// A multiset of letter tiles plus a number of blank (wildcard) tiles.
///
/// `Copy`, so search code can pass racks by value and backtrack for free.
#[derive(Default, Copy, Clone, Eq, PartialEq)]
pub struct Rack {
    mask: Mask,
    counts: [u8; LETTER_COUNT],
    wildcards: u8,
}

impl Rack {
    /// Parse a rack string, with [WILDCARD] denoting a blank tile.
    ///
    /// Letters are case-normalized. Panics if the string holds more than
    /// [MAX_RACK_SIZE] tiles, since wildcard branching is 26-ary per blank and
    /// oversized racks make the search explosive.
    pub fn from_letters(s: &str) -> Result<Rack, InvalidLetter> {
        assert!(s.chars().count() <= MAX_RACK_SIZE);

        let mut result = Rack::default();
        for c in s.chars() {
            if c == WILDCARD {
                result.wildcards += 1;
            } else {
                result.add(Letter::from_char(c)?, 1);
            }
        }
        Ok(result)
    }

    /// The full 100-tile English bag: 98 letter tiles plus 2 blanks.
    pub fn standard_bag() -> Rack {
        let mut result = Rack::default();
        for letter in Letter::all() {
            result.add(letter, LETTER_INFO[letter.index() as usize].initial_count());
        }
        result.wildcards = INITIAL_WILDCARDS;
        result
    }

    pub fn add(&mut self, c: Letter, count: u8) {
        self.mask.set(c, true);
        self.counts[c.index() as usize] += count;
    }

    pub fn add_wildcards(&mut self, count: u8) {
        self.wildcards += count;
    }

    pub fn remove(&mut self, c: Letter, count: u8) {
        let index = c.index() as usize;
        assert!(self.counts[index] >= count);

        self.counts[index] -= count;
        if self.counts[index] == 0 {
            self.mask.set(c, false);
        }
    }

    pub fn try_remove(&mut self, c: Letter, count: u8) -> bool {
        if self.counts[c.index() as usize] >= count {
            self.remove(c, count);
            true
        } else {
            false
        }
    }

    /// Spend one blank tile.
    pub fn use_wildcard(&mut self) {
        assert!(self.wildcards > 0);
        self.wildcards -= 1;
    }

    pub fn wildcards(self) -> u8 {
        self.wildcards
    }

    /// Total tiles on the rack, blanks included.
    pub fn tile_count(self) -> u8 {
        self.counts.iter().sum::<u8>() + self.wildcards
    }

    pub fn count_for(self, letter: Letter) -> u8 {
        self.counts[letter.index() as usize]
    }

    pub fn is_empty(self) -> bool {
        self.mask.is_empty() && self.wildcards == 0
    }

    pub fn usable_mask(self) -> Mask {
        self.mask
    }

    /// Component-wise comparison; blanks are not substituted for letters here.
    pub fn is_superset_of(self, other: Rack) -> bool {
        if !self.mask.is_superset_of(other.mask) {
            return false;
        }
        if self.wildcards < other.wildcards {
            return false;
        }
        self.counts.iter().zip(other.counts.iter()).all(|(a, b)| a >= b)
    }

    /// The distinct letters present and their multiplicities.
    pub fn letter_counts(self) -> impl Iterator<Item = (Letter, u8)> {
        self.mask.letters().map(move |c| (c, self.counts[c.index() as usize]))
    }

    pub fn assert_valid(self) {
        for c in Letter::all() {
            assert_eq!(
                self.counts[c.index() as usize] > 0,
                self.mask.get(c),
                "Mismatch for letter {:?}",
                c
            );
        }
    }

    /// Remove a uniformly random tile, blanks included.
    ///
    /// Returns the tile as its input token: an uppercase letter or [WILDCARD].
    pub fn remove_sample(&mut self, rng: &mut impl Rng) -> Option<char> {
        let total_count = self.tile_count();
        if total_count == 0 {
            return None;
        }

        let index = rng.gen_range(0..total_count);

        let mut sum = 0;
        for (c, count) in self.letter_counts() {
            sum += count;
            if sum > index {
                self.remove(c, 1);
                return Some(c.to_char());
            }
        }

        // the sample landed past every letter, so it is one of the blanks
        self.wildcards -= 1;
        Some(WILDCARD)
    }
}

mod debug {
    use std::fmt::{Debug, Formatter};

    use super::*;
    use crate::letter::LETTERS;

    impl Debug for Rack {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "Rack(\"")?;
            for (i, c) in LETTERS.chars().enumerate() {
                for _ in 0..self.counts[i] {
                    write!(f, "{}", c)?;
                }
            }
            for _ in 0..self.wildcards {
                write!(f, "{}", WILDCARD)?;
            }
            write!(f, "\")")
        }
    }
}
