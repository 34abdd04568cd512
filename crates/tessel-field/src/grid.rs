//! Index arithmetic shared by the field backends.

use tessel_core::{Direction, Extent, Point};

use crate::error::FieldError;

/// Validate construction dimensions.
///
/// Both sides must be at least 1 and the cell count must fit in a `u32`
/// (mesh links are `u32` indices; the same limit keeps every backend
/// interchangeable).
pub fn check_dims(width: u32, height: u32) -> Result<Extent, FieldError> {
    let cells = width as u64 * height as u64;
    if width == 0 || height == 0 || cells > u32::MAX as u64 {
        return Err(FieldError::InvalidDimensions { width, height });
    }
    Ok(Extent::new(width, height))
}

/// Row-major index of `(x, y)`.
#[inline]
pub fn flat_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// `v + delta` wrapped onto `[0, len)`.
#[inline]
pub fn wrap_coord(v: u32, delta: i32, len: u32) -> u32 {
    let n = len as i64;
    (((v as i64 + delta as i64) % n + n) % n) as u32
}

/// `v + delta`, or `None` if that leaves `[0, len)`.
#[inline]
pub fn step_coord(v: u32, delta: i32, len: u32) -> Option<u32> {
    let next = v as i64 + delta as i64;
    if next < 0 || next >= len as i64 {
        None
    } else {
        Some(next as u32)
    }
}

/// The neighbour of `(x, y)` in `dir` on a torus of size `extent`.
#[inline]
pub fn wrapped_neighbour(extent: Extent, x: u32, y: u32, dir: Direction) -> Point {
    let (dx, dy) = dir.offset();
    Point::new(
        wrap_coord(x, dx, extent.width),
        wrap_coord(y, dy, extent.height),
    )
}

/// The neighbour of `(x, y)` in `dir`, or `None` past the border.
#[inline]
pub fn bounded_neighbour(extent: Extent, x: u32, y: u32, dir: Direction) -> Option<Point> {
    let (dx, dy) = dir.offset();
    Some(Point::new(
        step_coord(x, dx, extent.width)?,
        step_coord(y, dy, extent.height)?,
    ))
}

/// Checked form of a coordinate, for `try_*` accessors.
pub fn check_point(extent: Extent, x: u32, y: u32) -> Result<(), FieldError> {
    let point = Point::new(x, y);
    if extent.contains(point) {
        Ok(())
    } else {
        Err(FieldError::OutOfBounds { point, extent })
    }
}
