//! Seeded random source shared by every generation stage

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random source for reproducible generation
///
/// Every stage draws from the same source in a fixed order, so a seed fully
/// determines the finished map.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform float in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform integer in the closed range `[low, high]`
    ///
    /// Returns `low` when the range is empty instead of panicking.
    pub fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}
