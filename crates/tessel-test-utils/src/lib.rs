//! Test utilities for Tessel development.
//!
//! Fixture rules with predictable output ([`StampRule`], [`CopyRule`],
//! [`FailingRule`]) and helpers that convert between binary fields and
//! `#`/`.` text patterns.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod pattern;

pub use fixtures::{CopyRule, FailingRule, StampRule};
pub use pattern::{live_cells, pattern_field, render, stamp_pattern};
