//! Random number sources for sampling.
//!
//! Every sampling routine takes its generator explicitly so renders can be
//! reproduced from a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Generator used for a whole render.
pub type TracerRng = ChaCha20Rng;

/// Build the render generator, seeded when a seed is given and from the
/// thread RNG otherwise.
pub fn make_rng(seed: Option<u64>) -> TracerRng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_rng(&mut rand::rng()),
    }
}

/// Random f64 in [0.0, 1.0)
#[inline]
pub fn random_f64<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Random f64 in [min, max)
#[inline]
pub fn random_f64_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}
