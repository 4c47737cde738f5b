//! Seedable random number generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from an optional seed, drawing a fresh seed when absent.
pub fn rng_from_option(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Derives `count` independent child streams from `rng`.
///
/// Seeds are drawn sequentially, so the children depend only on the
/// parent's state and not on the order in which they are later consumed.
pub fn split_streams<R: Rng>(rng: &mut R, count: usize) -> Vec<StdRng> {
    (0..count).map(|_| create_rng(rng.random())).collect()
}
