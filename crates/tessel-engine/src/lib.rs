//! Simulation driver for Tessel cellular automata.
//!
//! [`Simulation`] owns a [`FieldRing`](tessel_ring::FieldRing) of
//! generations and a [`Rule`](tessel_rule::Rule). Each
//! [`calculate_next_gen()`](Simulation::calculate_next_gen) claims a ring
//! slot (growing the ring or applying the [`MemFullPolicy`] when full)
//! and asks the rule to fill it from the previous generation. Rewinding
//! discards newer generations; fast-forwarding steps until a target
//! generation or an [`Interrupt`].
//!
//! Everything runs synchronously on the caller's thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod interrupt;
pub mod metrics;
pub mod sim;

pub use config::{ConfigError, MemFullPolicy, SimConfig};
pub use error::SimError;
pub use interrupt::{FnInterrupt, Interrupt, NeverInterrupt};
pub use metrics::SimMetrics;
pub use sim::Simulation;
