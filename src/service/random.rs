//! Random number sources.
//!
//! Generation draws every random value through [`RandomSource`] so the
//! thread-local generator can be swapped for a seeded or scripted one.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Return a value in `[min, max)`.
    ///
    /// A degenerate range (`max <= min`) yields `min`.
    fn next_in_range(&mut self, min: u64, max: u64) -> u64;
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Use the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Use a deterministic generator seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }
}

/// [`RandomSource`] replaying a fixed list of values.
///
/// Each value is clamped into the requested range. The list cycles once
/// exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<u64>,
    position: usize,
}

impl SequenceRandom {
    /// Create a source replaying `values` in order.
    #[must_use]
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_in_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min || self.values.is_empty() {
            return min;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value.clamp(min, max - 1)
    }
}
