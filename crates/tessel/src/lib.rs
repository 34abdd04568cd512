//! Tessel: toroidal cellular-automaton grids with a growable generation
//! history.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tessel sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//! use tessel::rules::seed;
//!
//! let config = SimConfig {
//!     width: 32,
//!     height: 32,
//!     mem_slots: 16,
//!     max_mem_slots: Some(64),
//!     growth_factor: 2.0,
//!     ..SimConfig::default()
//! };
//! let mut start = BinaryField::new(BinaryStorage::Packed, 32, 32).unwrap();
//! seed::random_fill(&mut start, 0.3, 42);
//!
//! let mut sim = Simulation::new(config, start, ClassicLife::new()).unwrap();
//! assert!(sim.go_to_gen(20, &NeverInterrupt).unwrap());
//! assert_eq!(sim.current_gen(), 20);
//!
//! // Rewind and replay.
//! let twenty = sim.current().unwrap().clone();
//! sim.go_to_gen(5, &NeverInterrupt).unwrap();
//! sim.go_to_gen(20, &NeverInterrupt).unwrap();
//! assert!(sim.current().unwrap().same_cells(&twenty));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | Geometry, directions, cloning policy, cell-value traits |
//! | [`field`] | `tessel-field` | `CellField` trait and the dense, mesh and packed backends |
//! | [`ring`] | `tessel-ring` | Circular buffers and the generation ring |
//! | [`rule`] | `tessel-rule` | `Rule` trait, step context, parameters |
//! | [`rules`] | `tessel-rules` | Reference kernels and random seeding |
//! | [`engine`] | `tessel-engine` | The `Simulation` driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry, directions and cell-value traits (`tessel-core`).
pub use tessel_core as types;

/// Cell fields (`tessel-field`).
///
/// The [`field::CellField`] trait and its backends: [`field::DenseField`],
/// [`field::MeshField`] and the bit-packed [`field::BitField`].
pub use tessel_field as field;

/// Circular buffers (`tessel-ring`).
///
/// [`ring::RingBuffer`] for any payload, [`ring::FieldRing`] for
/// generations of a cell field.
pub use tessel_ring as ring;

/// Rule kernels plug in here (`tessel-rule`).
pub use tessel_rule as rule;

/// Reference rule kernels (`tessel-rules`).
pub use tessel_rules as rules;

/// The simulation driver (`tessel-engine`).
pub use tessel_engine as engine;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use tessel_core::{CloningPolicy, Direction, Extent, Point, RuleError};

    // Fields
    pub use tessel_field::{
        BinaryField, BinaryStorage, CellField, DenseField, EdgeBehavior, FieldError,
        GenericField, Storage,
    };

    // Ring
    pub use tessel_ring::{FieldRing, ResizeOptions, RingBuffer, RingEnd, RingError};

    // Rules
    pub use tessel_rule::{Rule, RuleContext, RuleParam};
    pub use tessel_rules::{ClassicLife, Decay};

    // Engine
    pub use tessel_engine::{
        MemFullPolicy, NeverInterrupt, SimConfig, SimError, SimMetrics, Simulation,
    };
}
