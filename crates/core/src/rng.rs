//! Deterministic random stream shared by maze generation and enemy decisions.
//! Every draw goes through one seeded engine, so call order is part of the replay contract.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub struct RngSource {
    engine: ChaCha8Rng,
    draws: u64,
}

impl RngSource {
    pub fn new(seed: u64) -> Self {
        Self { engine: ChaCha8Rng::seed_from_u64(seed), draws: 0 }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.engine.next_u64()
    }

    /// Uniform-ish value in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next_u64() % bound as u64) as usize
    }

    pub fn coin_flip(&mut self) -> bool {
        self.next_u64() % 2 == 1
    }

    pub fn pick<T: Copy>(&mut self, choices: &[T]) -> T {
        choices[self.below(choices.len())]
    }

    /// Number of values drawn so far; part of the replay fingerprint.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

pub fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

/// Seed for one generation attempt of one level of a run.
pub fn derive_level_seed(run_seed: u64, level_index: u32, attempt: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(level_index).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= u64::from(attempt).wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
