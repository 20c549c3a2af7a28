//! Seedable random sources.
//!
//! Every solve owns its own generator; nothing here touches global RNG
//! state beyond drawing a seed when the caller did not supply one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::formula::Assignment;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns `seed` or a fresh one drawn from the thread generator.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// A uniformly random assignment of `n` variables.
pub fn random_assignment<R: Rng>(n: usize, rng: &mut R) -> Assignment {
    (0..n).map(|_| rng.random_bool(0.5)).collect()
}
