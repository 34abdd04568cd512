//! Rule-kernel trait and step context for Tessel simulations.
//!
//! A [`Rule`] computes one generation from the previous one through a
//! [`RuleContext`]: shared access to the previous field, mutable access
//! to the freshly claimed next field. Rules may expose bounded integer
//! [`RuleParam`]s that the driver forwards changes to.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod param;
pub mod rule;

pub use context::RuleContext;
pub use param::RuleParam;
pub use rule::Rule;
pub use tessel_core::RuleError;
