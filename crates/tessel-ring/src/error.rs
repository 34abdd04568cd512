//! Error types for ring buffer operations.

use std::error::Error;
use std::fmt;

use tessel_core::Extent;
use tessel_field::FieldError;

/// Errors from ring construction, indexed access or insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RingError {
    /// Capacity below [`MIN_CAPACITY`](crate::MIN_CAPACITY).
    CapacityTooSmall {
        /// The rejected capacity.
        requested: usize,
    },
    /// A logical index outside `[0, len)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Current number of entries.
        len: usize,
    },
    /// A field offered to a field ring does not match its cell size.
    DimensionMismatch {
        /// The ring's field size.
        expected: Extent,
        /// The offered field's size.
        found: Extent,
    },
    /// Building or copying a field failed.
    Field(FieldError),
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityTooSmall { requested } => write!(
                f,
                "ring capacity must be >= {}, got {requested}",
                crate::MIN_CAPACITY
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for ring of length {len}")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(f, "field is {found}, ring holds {expected} fields")
            }
            Self::Field(e) => write!(f, "field error: {e}"),
        }
    }
}

impl Error for RingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldError> for RingError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}
