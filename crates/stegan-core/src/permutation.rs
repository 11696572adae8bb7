//! Permutation of pixel positions.
//!
//! The pixels of a carrier are not visited in raster order but in a shuffled
//! order derived from the password. Without the password a reader does not
//! know which pixels carry the payload, nor in which order.

use log::debug;

use crate::prng::{seeded, EMPTY_SEED};

/// Seed of the pixel order, derived from the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationSeed {
    /// No password was given.
    Empty,
    /// Sum of the code points at the even positions (0, 2, 4, ...) of the password.
    Password(u64),
}

impl PermutationSeed {
    pub fn from_password(password: &str) -> Self {
        if password.is_empty() {
            return Self::Empty;
        }

        Self::Password(password.chars().step_by(2).map(|c| c as u64).sum())
    }

    pub fn value(self) -> u64 {
        match self {
            PermutationSeed::Empty => EMPTY_SEED,
            PermutationSeed::Password(sum) => sum,
        }
    }
}

/// Pseudo-random order over the pixel indices `0..length`.
///
/// The permutation is deterministic given the same seed, allowing the decoder
/// to reconstruct the same ordering used during embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    /// `indices[i]` is the pixel visited as the i-th one
    indices: Vec<usize>,
}

impl Permutation {
    /// Create a permutation of `0..length` from a seed.
    pub fn from_seed(seed: PermutationSeed, length: usize) -> Self {
        let mut rng = seeded(seed.value());

        // Initialize identity permutation
        let mut indices: Vec<usize> = (0..length).collect();

        // Fisher-Yates shuffle, drawn as u64 so 32 and 64 bit targets agree
        for i in (1..length).rev() {
            let j = rng.u64(0..=i as u64) as usize;
            indices.swap(i, j);
        }
        debug!("shuffled {length} pixel positions with {seed:?}");

        Permutation { indices }
    }

    pub fn from_password(password: &str, length: usize) -> Self {
        Self::from_seed(PermutationSeed::from_password(password), length)
    }

    /// Create an identity permutation (no shuffling).
    pub fn identity(length: usize) -> Self {
        Permutation {
            indices: (0..length).collect(),
        }
    }

    /// The pixel index visited at step `i`.
    #[inline]
    pub fn get(&self, i: usize) -> usize {
        self.indices[i]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.indices.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
