//! Benchmark profiles for Tessel.
//!
//! - [`life_profile`]: 256x256 Game of Life run on a chosen backend
//! - [`seeded_binary`]: reproducible random binary field

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_engine::{SimConfig, SimError, Simulation};
use tessel_field::{BinaryField, BinaryStorage, FieldError};
use tessel_rules::{seed, ClassicLife};

/// Side length of the reference grid.
pub const SIDE: u32 = 256;

/// A `width x height` binary field on `storage`, about 35% live.
pub fn seeded_binary(
    storage: BinaryStorage,
    width: u32,
    height: u32,
    seed: u64,
) -> Result<BinaryField, FieldError> {
    let mut field = BinaryField::new(storage, width, height)?;
    seed::random_fill(&mut field, 0.35, seed);
    Ok(field)
}

/// A [`SIDE`]x[`SIDE`] Game of Life on a torus with a 32-slot history.
pub fn life_profile(
    storage: BinaryStorage,
    seed: u64,
) -> Result<Simulation<BinaryField, ClassicLife>, SimError> {
    let config = SimConfig {
        width: SIDE,
        height: SIDE,
        mem_slots: 32,
        max_mem_slots: Some(32),
        ..SimConfig::default()
    };
    let start = seeded_binary(storage, SIDE, SIDE, seed)?;
    Simulation::new(config, start, ClassicLife::new())
}
