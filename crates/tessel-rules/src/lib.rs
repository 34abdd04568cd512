//! Reference rule kernels for Tessel.
//!
//! - [`ClassicLife`]: Conway's birth/survival rule with adjustable
//!   survival and overpopulation thresholds.
//! - [`Decay`]: byte-valued cells that fade each generation, slowed by
//!   live neighbours.
//! - [`seed`]: deterministic random initial states.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod classic;
pub mod decay;
pub mod seed;

pub use classic::ClassicLife;
pub use decay::Decay;
