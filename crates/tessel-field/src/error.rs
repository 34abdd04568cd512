//! Error types for field construction and access.

use std::error::Error;
use std::fmt;

use tessel_core::{Extent, Point, Rect};

/// Errors arising from field construction, checked access or region copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Width or height is zero, or the cell count is too large for the
    /// chosen backend.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A coordinate lies outside the field.
    OutOfBounds {
        /// The offending coordinate.
        point: Point,
        /// Size of the field.
        extent: Extent,
    },
    /// A copy region does not fit inside a field.
    RegionOutOfBounds {
        /// The offending region.
        region: Rect,
        /// Size of the field it was checked against.
        extent: Extent,
    },
    /// A cell buffer has the wrong length for the requested size.
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Length supplied.
        found: usize,
    },
    /// Two fields that must agree in size do not.
    DimensionMismatch {
        /// Required size.
        expected: Extent,
        /// Size actually supplied.
        found: Extent,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid field dimensions {width}x{height}")
            }
            Self::OutOfBounds { point, extent } => {
                write!(f, "coordinate {point} outside {extent} field")
            }
            Self::RegionOutOfBounds { region, extent } => write!(
                f,
                "region {} at {} does not fit in {extent} field",
                region.extent, region.origin
            ),
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, got {found}")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(f, "field is {found}, expected {expected}")
            }
        }
    }
}

impl Error for FieldError {}
