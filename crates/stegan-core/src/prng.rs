//! Seeded pseudo random number generation.
//!
//! Every embedding, extraction or cipher construction owns a fresh [`Rng`]
//! created from a seed, nothing is shared between calls. The generator is
//! `fastrand`'s wyrand, which is part of the hiding format: changing it would
//! make previously hidden payloads unrecoverable.

pub use fastrand::Rng;

/// FNV-1a offset basis, also the seed used when no password is given.
pub const EMPTY_SEED: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Creates a generator that yields the same sequence for the same seed.
pub fn seeded(seed: u64) -> Rng {
    Rng::with_seed(seed)
}

/// Hash seed bytes to u64 for RNG seeding (64 bit FNV-1a).
pub fn hash_seed(seed: &[u8]) -> u64 {
    seed.iter().fold(EMPTY_SEED, |hash, &byte| {
        (hash ^ (byte as u64)).wrapping_mul(FNV_PRIME)
    })
}
