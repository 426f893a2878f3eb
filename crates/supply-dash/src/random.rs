//! Explicit random sources for the generators.
//!
//! Every generator takes a `&mut impl UnitSource` instead of reaching for a
//! thread-local RNG, so a seeded [`ChaCha8Rng`] reproduces a whole dashboard and
//! [`FixedUnit`] pins every draw to a bound.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait UnitSource {
    /// Next draw in `[0, 1]`.
    fn next_unit(&mut self) -> f64;

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}

impl<R: Rng + ?Sized> UnitSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Returns the same unit value on every draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedUnit(pub f64);

impl UnitSource for FixedUnit {
    fn next_unit(&mut self) -> f64 {
        self.0.clamp(0.0, 1.0)
    }
}

pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
