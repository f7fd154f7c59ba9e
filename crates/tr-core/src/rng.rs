//! Deterministic game RNG wrapper.
//!
//! One `GameRng` drives every random choice of a world (station colors,
//! train colors, spawn countdowns).  The world is single-threaded, so a single
//! stream seeded from `GameConfig::seed` makes whole games reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// World-level RNG.
pub struct GameRng(SmallRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        GameRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed a fresh stream from `seed` mixed with `offset`.  Used to resume a
    /// restored world at a given frame without storing RNG internals.
    pub fn resumed(seed: u64, offset: u64) -> Self {
        GameRng(SmallRng::seed_from_u64(seed ^ offset.wrapping_mul(MIXING_CONSTANT)))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
