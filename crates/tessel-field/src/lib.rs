//! Toroidal cell fields for Tessel simulations.
//!
//! This crate defines the [`CellField`] trait, the 2D grid abstraction
//! every rule kernel reads from and writes to, along with its storage
//! backends and neighbour helpers.
//!
//! # Backends
//!
//! - [`DenseField`]: row-major `Vec` of values (default, cache-friendly)
//! - [`MeshField`]: arena of cells with 8 precomputed wrapped neighbour
//!   indices per cell, so wrap lookups skip the modulo arithmetic
//! - [`BitField`]: bit-packed binary cells
//!
//! [`Storage`] and [`BinaryStorage`] pick a backend at construction time
//! and yield a [`GenericField`] or [`BinaryField`].
//!
//! # Coordinate checks
//!
//! [`CellField::get`] and [`CellField::set`] check coordinates with
//! `debug_assert!` only. In release builds an out-of-range coordinate
//! reads or writes an unspecified cell or panics on slice indexing. Use
//! [`CellField::try_get`] / [`CellField::try_set`] when the caller cannot
//! guarantee the range.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bits;
pub mod dense;
pub mod edge;
pub mod error;
pub mod field;
pub mod grid;
pub mod mesh;
pub mod neighbours;
pub mod policy;
pub mod storage;

#[cfg(test)]
pub(crate) mod compliance;

pub use bits::BitField;
pub use dense::DenseField;
pub use edge::EdgeBehavior;
pub use error::FieldError;
pub use field::CellField;
pub use mesh::MeshField;
pub use neighbours::{live_neighbour_count, neighbour_sum, neighbours};
pub use policy::PolicyCell;
pub use storage::{BinaryField, BinaryStorage, GenericField, Storage};
