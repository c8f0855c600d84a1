//! Shared inputs for the dynarray benchmarks.
//!
//! Inputs come from a seeded ChaCha8 stream so every run measures the
//! same data.

#![forbid(unsafe_code)]

use dynarray_arena::ArrayBuffer;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed shared by every benchmark input.
pub const SEED: u64 = 42;

/// `len` uniform values in `[0, 1)`.
pub fn uniform_values(len: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    (0..len).map(|_| unit_f64(rng.next_u64())).collect()
}

/// `len` values drawn from `distinct` evenly spaced levels.
///
/// Gives `unique` a controllable number of distinct outputs.
pub fn repeating_values(len: usize, distinct: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    (0..len)
        .map(|_| (rng.next_u64() % distinct.max(1)) as f64)
        .collect()
}

/// A buffer holding `values`.
pub fn buffer_from(values: &[f64]) -> ArrayBuffer {
    ArrayBuffer::from_slice(values, values.len()).expect("bench allocation failed")
}

/// Map the top 53 bits of `bits` onto `[0, 1)`.
fn unit_f64(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
