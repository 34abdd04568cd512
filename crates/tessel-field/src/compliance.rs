//! CellField trait compliance test helpers.
//!
//! These functions verify that a backend satisfies the invariants of the
//! trait contract. Reused across the dense, mesh and bit-packed test
//! modules.

use tessel_core::{Direction, Extent, Point};

use crate::field::{check_region, CellField};
use crate::FieldError;

/// Sizes every check runs on: degenerate, square, oblong both ways.
const SIZES: [(u32, u32); 5] = [(1, 1), (3, 3), (4, 3), (2, 5), (6, 4)];

fn patterned<F: CellField>(
    make: &impl Fn(u32, u32) -> F,
    value: &impl Fn(usize) -> F::Value,
    w: u32,
    h: u32,
) -> F {
    let mut f = make(w, h);
    for y in 0..h {
        for x in 0..w {
            f.set(x, y, value((y * w + x) as usize));
        }
    }
    f
}

fn snapshot<F: CellField>(f: &F) -> Vec<F::Value> {
    let Extent { width, height } = f.extent();
    let mut out = Vec::with_capacity(f.extent().cell_count());
    for y in 0..height {
        for x in 0..width {
            out.push(f.get(x, y));
        }
    }
    out
}

/// `get_with_wrap` equals `get` at the offset coordinate modulo the size.
pub fn assert_wrap_correct<F: CellField>(f: &F) {
    let Extent { width, height } = f.extent();
    for y in 0..height {
        for x in 0..width {
            for dir in Direction::ALL {
                let (dx, dy) = dir.offset();
                let nx = (x as i64 + dx as i64).rem_euclid(width as i64) as u32;
                let ny = (y as i64 + dy as i64).rem_euclid(height as i64) as u32;
                assert_eq!(
                    f.get_with_wrap(x, y, dir),
                    f.get(nx, ny),
                    "wrap mismatch at ({x}, {y}) {dir:?} on {width}x{height}"
                );
            }
        }
    }
}

/// `get_without_wrap` yields the sentinel exactly when the neighbour is
/// past the border, and the real neighbour otherwise.
pub fn assert_no_wrap_sentinel<F: CellField>(f: &F, sentinel: F::Value) {
    let Extent { width, height } = f.extent();
    for y in 0..height {
        for x in 0..width {
            for dir in Direction::ALL {
                let (dx, dy) = dir.offset();
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;
                let got = f.get_without_wrap(x, y, dir, sentinel.clone());
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    assert_eq!(got, sentinel, "({x}, {y}) {dir:?} should be outside");
                } else {
                    assert_eq!(got, f.get(nx as u32, ny as u32), "({x}, {y}) {dir:?}");
                }
            }
        }
    }
}

/// Overlapping copies inside one field match a copy staged by hand.
pub fn assert_self_overlap_copy<F: CellField>(f: &F) {
    let Extent { width, height } = f.extent();
    let size = Extent::new(width.min(3), height.min(3));
    let shifts = [(0, 0, 1, 0), (1, 0, 0, 0), (0, 1, 0, 0), (0, 0, 1, 1)];
    let mut scratch = Vec::new();
    for (sx, sy, tx, ty) in shifts {
        let src = Point::new(sx, sy);
        let dst = Point::new(tx, ty);
        if check_region(f.extent(), src, size).is_err()
            || check_region(f.extent(), dst, size).is_err()
        {
            continue;
        }
        let before = snapshot(f);
        let mut expected = before.clone();
        for dy in 0..size.height {
            for dx in 0..size.width {
                let from = ((sy + dy) * width + sx + dx) as usize;
                let to = ((ty + dy) * width + tx + dx) as usize;
                expected[to] = before[from].clone();
            }
        }

        let mut direct = f.clone();
        direct.copy_region_within(size, src, dst, None).unwrap();
        assert_eq!(snapshot(&direct), expected, "fresh buffer, {src} -> {dst}");

        let mut reused = f.clone();
        reused
            .copy_region_within(size, src, dst, Some(&mut scratch))
            .unwrap();
        assert_eq!(snapshot(&reused), expected, "scratch buffer, {src} -> {dst}");
    }
}

/// Growing pads with defaults; shrinking truncates; common cells survive.
pub fn assert_resized_clone<F: CellField>(f: &F) {
    let Extent { width, height } = f.extent();
    for (nw, nh) in [(width + 2, height + 1), (1, 1), (width, height)] {
        let g = f.resized_clone(nw, nh).unwrap();
        assert_eq!(g.extent(), Extent::new(nw, nh));
        for y in 0..nh {
            for x in 0..nw {
                if x < width && y < height {
                    assert_eq!(g.get(x, y), f.get(x, y));
                } else {
                    assert_eq!(g.get(x, y), F::Value::default());
                }
            }
        }
    }
    assert!(matches!(
        f.resized_clone(0, 1),
        Err(FieldError::InvalidDimensions { .. })
    ));
}

/// `fill_all`, `fill_empty` and `clear_with_default` touch the right cells.
pub fn assert_fills<F: CellField>(f: &F, a: F::Value, b: F::Value) {
    let mut g = f.clone();
    g.fill_all(a.clone(), false);
    assert!(snapshot(&g).iter().all(|v| *v == a));

    g.clear_with_default();
    assert!(snapshot(&g).iter().all(|v| *v == F::Value::default()));

    g.set(0, 0, a.clone());
    g.fill_empty(b.clone(), true);
    assert_eq!(g.get(0, 0), a);
    let rest = snapshot(&g).into_iter().skip(1);
    for v in rest {
        assert_eq!(v, b);
    }
}

/// Region copies reject rectangles that stick out of either field.
pub fn assert_region_bounds<F: CellField>(f: &F) {
    let Extent { width, height } = f.extent();
    let mut g = f.clone();
    let too_wide = Extent::new(width + 1, 1);
    assert!(matches!(
        g.copy_region_from(f, too_wide, Point::ORIGIN, Point::ORIGIN),
        Err(FieldError::RegionOutOfBounds { .. })
    ));
    assert!(matches!(
        g.copy_region_within(Extent::new(1, 1), Point::ORIGIN, Point::new(0, height), None),
        Err(FieldError::RegionOutOfBounds { .. })
    ));
    g.copy_region_from(f, f.extent(), Point::ORIGIN, Point::ORIGIN)
        .unwrap();
    assert!(g.same_cells(f));
}

/// A clone is cell-for-cell equal and unaffected by later writes.
pub fn assert_clone_independent<F: CellField>(f: &F, marker: F::Value) {
    let mut g = f.clone();
    assert!(g.same_cells(f));
    g.set(0, 0, marker.clone());
    if f.get(0, 0) != marker {
        assert!(!g.same_cells(f));
    }
}

/// Run every check on a patterned field of each test size.
///
/// `value(i)` supplies the content of the i-th cell in row-major order;
/// it should be non-default for every `i`.
pub fn run_full_compliance<F: CellField>(
    make: impl Fn(u32, u32) -> F,
    value: impl Fn(usize) -> F::Value,
) {
    for (w, h) in SIZES {
        let f = patterned(&make, &value, w, h);
        assert_wrap_correct(&f);
        assert_no_wrap_sentinel(&f, F::Value::default());
        assert_self_overlap_copy(&f);
        assert_resized_clone(&f);
        assert_fills(&f, value(0), value(1));
        assert_region_bounds(&f);
        assert_clone_independent(&f, F::Value::default());
    }
}
