//! Fixed-width letter count vectors.
//!
//! A `LetterVector` holds one count per lowercase letter, index 0 for 'a'
//! through index 25 for 'z'. It is a `Copy` value type and hashes by
//! content, so it can be used directly as a key in the search's seen-set.

use std::fmt;
use std::ops::{Add, AddAssign, Index};

use rand::Rng;
use serde::Serialize;

/// Number of letters tracked by a vector.
pub const LETTERS_COUNT: usize = 26;

/// The tracked letters, in index order.
pub const ALPHABET: &[u8; LETTERS_COUNT] = b"abcdefghijklmnopqrstuvwxyz";

/// Index of the letter 's', which receives the plural suffixes.
pub const S_INDEX: usize = 18;

/// Exclusive upper bound for randomized counts.
pub const RANDOM_COUNT_BOUND: u32 = 50;

/// Per-letter counts for the 26 lowercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LetterVector {
    counts: [u32; LETTERS_COUNT],
}

impl LetterVector {
    /// The all-zero vector, identity for addition.
    pub const ZERO: Self = Self {
        counts: [0; LETTERS_COUNT],
    };

    /// The all-ones vector. Every letter is named once in a sentence.
    pub const ONES: Self = Self {
        counts: [1; LETTERS_COUNT],
    };

    /// Create a vector from explicit counts.
    #[must_use]
    pub const fn from_counts(counts: [u32; LETTERS_COUNT]) -> Self {
        Self { counts }
    }

    /// Create a vector with every count drawn uniformly from `0..bound`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bound: u32) -> Self {
        let mut vector = Self::ZERO;
        vector.randomize(rng, bound);
        vector
    }

    /// Raw counts, in alphabet order.
    #[must_use]
    pub fn counts(&self) -> &[u32; LETTERS_COUNT] {
        &self.counts
    }

    /// Count for the letter at `index`.
    ///
    /// # Panics
    /// Panics if `index >= LETTERS_COUNT`.
    #[must_use]
    pub fn get(&self, index: usize) -> u32 {
        self.counts[index]
    }

    /// Count for a lowercase ASCII letter, `None` for anything else.
    #[must_use]
    pub fn letter(&self, letter: char) -> Option<u32> {
        letter_index(letter).map(|index| self.counts[index])
    }

    /// Number of components equal to `n`.
    #[must_use]
    pub fn count(&self, n: u32) -> usize {
        self.counts.iter().filter(|&&c| c == n).count()
    }

    /// Overwrite this vector with the contents of `other`.
    pub fn assign(&mut self, other: &Self) {
        self.counts = other.counts;
    }

    /// Increase the count at `index` by `amount`.
    pub fn bump(&mut self, index: usize, amount: u32) {
        debug_assert!(index < LETTERS_COUNT, "Letter index out of range: {}", index);
        self.counts[index] += amount;
    }

    /// Replace every count with an independent draw from `0..bound`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, bound: u32) {
        debug_assert!(bound > 0, "Random bound must be positive");
        for count in &mut self.counts {
            *count = rng.gen_range(0..bound);
        }
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Largest single count.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterate `(letter, count)` pairs in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        ALPHABET
            .iter()
            .zip(self.counts.iter())
            .map(|(&letter, &count)| (char::from(letter), count))
    }
}

/// Index of a lowercase ASCII letter.
#[must_use]
pub fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter as u8 - b'a') as usize)
    } else {
        None
    }
}

impl Default for LetterVector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for LetterVector {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for LetterVector {
    fn add_assign(&mut self, rhs: Self) {
        for (count, extra) in self.counts.iter_mut().zip(rhs.counts.iter()) {
            *count += extra;
        }
    }
}

impl AddAssign<&LetterVector> for LetterVector {
    fn add_assign(&mut self, rhs: &LetterVector) {
        *self += *rhs;
    }
}

impl Index<usize> for LetterVector {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.counts[index]
    }
}

impl From<[u32; LETTERS_COUNT]> for LetterVector {
    fn from(counts: [u32; LETTERS_COUNT]) -> Self {
        Self::from_counts(counts)
    }
}

impl fmt::Display for LetterVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (letter, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", letter, count)?;
        }
        write!(f, "]")
    }
}
