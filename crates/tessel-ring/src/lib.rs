//! Generation ring buffers for Tessel simulations.
//!
//! [`RingCursor`] does the position/count bookkeeping of a circular
//! window over `capacity` slots. [`RingBuffer`] pairs it with owned slot
//! payloads and a [`SlotSource`] that fills freshly claimed slots.
//! [`FieldRing`] is the ring of [`CellField`](tessel_field::CellField)
//! snapshots used for simulation history: new slots are cloned from a
//! template field, and [`resize_to`](RingBuffer::resize_to) rebuilds the
//! ring for a new capacity and/or a new cell size.
//!
//! Positions outside the live window may still hold stale payloads; only
//! the cursor says which slots are live.
//! [`reclaim_unused_slots`](RingBuffer::reclaim_unused_slots) drops them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod end;
pub mod error;
pub mod field_ring;
pub mod ring;
pub mod source;

pub use cursor::RingCursor;
pub use end::{ResizeOptions, RingEnd};
pub use error::RingError;
pub use field_ring::{FieldRing, FieldTemplates};
pub use ring::RingBuffer;
pub use source::{DefaultSlots, SlotSource};

/// Smallest permitted ring capacity.
pub const MIN_CAPACITY: usize = 2;
