//! Grid geometry: sizes, positions, and the rectangle-overlap test used
//! to decide whether a region copy must be staged.

use std::fmt;

/// Width and height of a grid or a copy region, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Extent {
    /// Create an extent.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells covered.
    pub const fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True if either side is zero.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Component-wise minimum; the area two grids have in common when
    /// both are anchored at the origin.
    pub fn intersect(self, other: Extent) -> Extent {
        Extent::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// True if `p` lies inside `[0, width) × [0, height)`.
    pub const fn contains(self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A cell position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point::new(0, 0);
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Size.
    pub extent: Extent,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(origin: Point, extent: Extent) -> Self {
        Self { origin, extent }
    }

    /// One past the last column, widened to avoid overflow.
    pub const fn right(&self) -> u64 {
        self.origin.x as u64 + self.extent.width as u64
    }

    /// One past the last row, widened to avoid overflow.
    pub const fn bottom(&self) -> u64 {
        self.origin.y as u64 + self.extent.height as u64
    }

    /// True if the rectangle lies entirely within a grid of size `bounds`.
    pub const fn fits_in(&self, bounds: Extent) -> bool {
        self.right() <= bounds.width as u64 && self.bottom() <= bounds.height as u64
    }

    /// True if the two rectangles share at least one cell.
    ///
    /// Rectangles that merely touch along an edge do not overlap, and an
    /// empty rectangle overlaps nothing.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.extent.is_empty() || other.extent.is_empty() {
            return false;
        }
        let (ax, ay) = (self.origin.x as u64, self.origin.y as u64);
        let (bx, by) = (other.origin.x as u64, other.origin.y as u64);
        ax < other.right() && bx < self.right() && ay < other.bottom() && by < self.bottom()
    }
}

/// True if two equally sized regions anchored at `a` and `b` overlap.
pub fn regions_overlap(size: Extent, a: Point, b: Point) -> bool {
    Rect::new(a, size).overlaps(&Rect::new(b, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn shifted_by_one_overlaps() {
        let size = Extent::new(3, 3);
        assert!(regions_overlap(size, Point::new(0, 0), Point::new(1, 0)));
        assert!(regions_overlap(size, Point::new(2, 2), Point::new(0, 0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let size = Extent::new(3, 3);
        assert!(!regions_overlap(size, Point::new(0, 0), Point::new(3, 0)));
        assert!(!regions_overlap(size, Point::new(0, 0), Point::new(0, 3)));
        assert!(!regions_overlap(size, Point::new(3, 3), Point::new(0, 0)));
    }

    #[test]
    fn empty_rect_overlaps_nothing() {
        let a = Rect::new(Point::new(1, 1), Extent::new(0, 5));
        let b = Rect::new(Point::new(0, 0), Extent::new(4, 4));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn fits_in_handles_large_origins() {
        let r = Rect::new(Point::new(u32::MAX, 0), Extent::new(2, 1));
        assert!(!r.fits_in(Extent::new(u32::MAX, 1)));
        let r = Rect::new(Point::new(2, 1), Extent::new(2, 3));
        assert!(r.fits_in(Extent::new(4, 4)));
        assert!(!r.fits_in(Extent::new(3, 4)));
    }

    #[test]
    fn extent_intersect_and_contains() {
        let e = Extent::new(4, 2).intersect(Extent::new(3, 5));
        assert_eq!(e, Extent::new(3, 2));
        assert!(e.contains(Point::new(2, 1)));
        assert!(!e.contains(Point::new(3, 0)));
        assert_eq!(e.cell_count(), 6);
        assert_eq!(e.to_string(), "3x2");
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in 0u32..20, ay in 0u32..20, bx in 0u32..20, by in 0u32..20,
            w in 0u32..8, h in 0u32..8,
        ) {
            let size = Extent::new(w, h);
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(regions_overlap(size, a, b), regions_overlap(size, b, a));
        }

        #[test]
        fn overlap_matches_cell_intersection(
            ax in 0u32..8, ay in 0u32..8, bx in 0u32..8, by in 0u32..8,
            w in 1u32..5, h in 1u32..5,
        ) {
            let size = Extent::new(w, h);
            let shared = (ax..ax + w).any(|x| (bx..bx + w).contains(&x))
                && (ay..ay + h).any(|y| (by..by + h).contains(&y));
            prop_assert_eq!(
                regions_overlap(size, Point::new(ax, ay), Point::new(bx, by)),
                shared
            );
        }
    }
}
