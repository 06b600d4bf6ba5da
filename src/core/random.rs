//! Random sampling used by the obstacle spawner.
//!
//! The simulation only ever asks for uniform integers from small fixed
//! ranges, so the seam is a single method. Production code uses a seeded
//! PCG stream; tests script the exact values they want.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed list of values, cycling when exhausted. Each value is
/// clamped into the requested range.
#[cfg(test)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty());
        ScriptedRandom { values, next: 0 }
    }

    /// Every obstacle spawns in `lane` with `speed` and a grey color.
    pub fn obstacles(lane: u32, speed: u32) -> Self {
        Self::new(vec![lane, speed, 150, 150, 150])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn between(&mut self, low: u32, high: u32) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(low, high)
    }
}
