//! Deterministic RNG wrapper for fleet generation.
//!
//! A session holds exactly one `EngineRng`.  Seeded construction makes
//! fleet population reproducible (the same seed always yields the same
//! cars); entropy-seeded construction is the interactive default.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Engine-level RNG.
///
/// Used only on the single logical control thread — never shared.
pub struct EngineRng(SmallRng);

impl EngineRng {
    /// Deterministic RNG from an explicit seed.
    pub fn seeded(seed: u64) -> Self {
        EngineRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-deterministic RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        EngineRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is supplied, entropy-backed otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
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

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
