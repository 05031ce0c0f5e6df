//! Injectable randomness for adversary decisions.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Source of every stochastic decision the simulation makes.
pub trait Chance {
    /// Uniform sample in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    fn chance(&mut self, probability: f64) -> bool {
        self.roll() < probability
    }
}

/// Seeded production source.
#[derive(Clone, Debug)]
pub struct SimRng {
    rng: ChaCha8Rng,
}

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Chance for SimRng {
    fn roll(&mut self) -> f64 {
        // 53 high bits fill the f64 mantissa exactly.
        (self.rng.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (self.rng.next_u64() % len as u64) as usize
    }
}
