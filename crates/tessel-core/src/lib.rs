//! Core types and traits for Tessel cellular-automaton fields.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the compass [`Direction`]s used for neighbour lookup and mesh links,
//! the small geometry vocabulary used by region copies, the
//! [`CloningPolicy`] state machine, the value traits every cell type
//! must satisfy, and the [`RuleError`] returned by rule kernels.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cloning;
pub mod direction;
pub mod error;
pub mod geom;
pub mod value;

pub use cloning::CloningPolicy;
pub use direction::Direction;
pub use error::RuleError;
pub use geom::{Extent, Point, Rect};
pub use value::{CellValue, DeepClone, Magnitude};
