//! Deterministic random seeding.
//!
//! A seeded ChaCha8 stream drives every draw, so the same seed always
//! produces the same initial state regardless of storage backend.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_field::CellField;

/// Uniform sample in `[0, 1)` from the top 53 bits of a `u64`.
fn unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Set each cell live with probability `density`, dead otherwise.
///
/// `density` is clamped to `[0, 1]`. Returns the number of live cells
/// written. Cells are visited in row-major order.
pub fn random_fill<F>(field: &mut F, density: f64, seed: u64) -> usize
where
    F: CellField,
    F::Value: From<bool>,
{
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut live = 0;
    for y in 0..field.height() {
        for x in 0..field.width() {
            let alive = unit(&mut rng) < density;
            live += usize::from(alive);
            field.set(x, y, F::Value::from(alive));
        }
    }
    live
}

/// Fill every cell with a uniformly random byte.
pub fn random_bytes<F: CellField<Value = u8>>(field: &mut F, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for y in 0..field.height() {
        for x in 0..field.width() {
            field.set(x, y, (rng.next_u32() >> 24) as u8);
        }
    }
}
