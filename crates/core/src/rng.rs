//! RNG module - the single source of randomness in the game
//!
//! Spawning is the only random step: which empty cell receives a tile, and
//! whether that tile is a 2 or a 4. Both draws go through [`RandomSource`], so
//! tests can drive them with a seeded [`SimpleRng`] or a scripted source while
//! the binary plugs in `rand`'s `StdRng`.

use rand::rngs::StdRng;
use rand::Rng;

use crate::types::{Cell, SPAWN_FOUR, SPAWN_FOUR_ONE_IN, SPAWN_TWO};

/// Uniform integer source used for tile spawning.
pub trait RandomSource {
    /// Generate a value in `[0, max)`. `max` is never 0.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

impl RandomSource for StdRng {
    fn next_range(&mut self, max: u32) -> u32 {
        self.gen_range(0..max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would stay fixed under the multiplier alone.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32 with a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Draw the value of a freshly spawned tile: 4 one time in ten, else 2.
pub fn spawn_value(rng: &mut impl RandomSource) -> Cell {
    if rng.next_range(SPAWN_FOUR_ONE_IN) == 0 {
        SPAWN_FOUR
    } else {
        SPAWN_TWO
    }
}
