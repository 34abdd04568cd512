//! The [`CellField`] trait.

use std::fmt;

use tessel_core::{geom, CellValue, CloningPolicy, DeepClone, Direction, Extent, Point, Rect};

use crate::edge::EdgeBehavior;
use crate::error::FieldError;
use crate::grid;

/// A fixed-size 2D grid of homogeneous cell values.
///
/// Backends implement storage access and construction; addressing,
/// neighbour lookup, bulk fills and region copies are provided on top.
///
/// # Contract
///
/// - `width() >= 1` and `height() >= 1`, fixed for the field's lifetime.
/// - `get`/`set` expect `x < width()` and `y < height()`. This is checked
///   in debug builds only.
/// - `Clone` produces an independent field whose element copies follow
///   [`resolved_cloning_policy`](CellField::resolved_cloning_policy).
pub trait CellField: Clone + fmt::Debug {
    /// The cell type.
    type Value: CellValue;

    /// Size of the field.
    fn extent(&self) -> Extent;

    /// Value at `(x, y)`.
    fn get(&self, x: u32, y: u32) -> Self::Value;

    /// Overwrite the value at `(x, y)`.
    fn set(&mut self, x: u32, y: u32, value: Self::Value);

    /// A field of the same backend and cloning policy, sized
    /// `width × height`, with every cell at `Value::default()`.
    fn blank_like(&self, width: u32, height: u32) -> Result<Self, FieldError>;

    /// The stored policy, possibly still `AutoDetect`.
    fn cloning_policy(&self) -> CloningPolicy;

    /// Replace the policy. `AutoDetect` is resolved lazily on the next
    /// clone or deep fill.
    fn set_cloning_policy(&mut self, policy: CloningPolicy);

    /// The policy with `AutoDetect` resolved by scanning the cells once.
    /// The outcome is cached.
    fn resolved_cloning_policy(&self) -> CloningPolicy;

    /// Number of columns.
    fn width(&self) -> u32 {
        self.extent().width
    }

    /// Number of rows.
    fn height(&self) -> u32 {
        self.extent().height
    }

    /// Checked [`get`](CellField::get).
    fn try_get(&self, x: u32, y: u32) -> Result<Self::Value, FieldError> {
        grid::check_point(self.extent(), x, y)?;
        Ok(self.get(x, y))
    }

    /// Checked [`set`](CellField::set).
    fn try_set(&mut self, x: u32, y: u32, value: Self::Value) -> Result<(), FieldError> {
        grid::check_point(self.extent(), x, y)?;
        self.set(x, y, value);
        Ok(())
    }

    /// Value of the neighbour of `(x, y)` in `dir`, wrapping toroidally.
    fn get_with_wrap(&self, x: u32, y: u32, dir: Direction) -> Self::Value {
        let p = grid::wrapped_neighbour(self.extent(), x, y, dir);
        self.get(p.x, p.y)
    }

    /// Value of the neighbour of `(x, y)` in `dir`, or `outside` if the
    /// neighbour would fall past the border.
    fn get_without_wrap(
        &self,
        x: u32,
        y: u32,
        dir: Direction,
        outside: Self::Value,
    ) -> Self::Value {
        match grid::bounded_neighbour(self.extent(), x, y, dir) {
            Some(p) => self.get(p.x, p.y),
            None => outside,
        }
    }

    /// The neighbour in `dir` under `edge`; `None` past an absorbing border.
    fn neighbour(
        &self,
        x: u32,
        y: u32,
        dir: Direction,
        edge: EdgeBehavior,
    ) -> Option<Self::Value> {
        match edge {
            EdgeBehavior::Wrap => Some(self.get_with_wrap(x, y, dir)),
            EdgeBehavior::Absorb => {
                grid::bounded_neighbour(self.extent(), x, y, dir).map(|p| self.get(p.x, p.y))
            }
        }
    }

    /// Set every cell to `value`.
    ///
    /// With `deep`, each cell receives its own copy per the resolved
    /// cloning policy; otherwise cells share whatever `Clone` shares.
    fn fill_all(&mut self, value: Self::Value, deep: bool) {
        let policy = fill_policy(self, deep);
        let Extent { width, height } = self.extent();
        for y in 0..height {
            for x in 0..width {
                self.set(x, y, value.clone_with(policy));
            }
        }
    }

    /// Set every cell still holding `Value::default()` to `value`.
    fn fill_empty(&mut self, value: Self::Value, deep: bool) {
        let policy = fill_policy(self, deep);
        let empty = Self::Value::default();
        let Extent { width, height } = self.extent();
        for y in 0..height {
            for x in 0..width {
                if self.get(x, y) == empty {
                    self.set(x, y, value.clone_with(policy));
                }
            }
        }
    }

    /// Reset every cell to `Value::default()`.
    fn clear_with_default(&mut self) {
        self.fill_all(Self::Value::default(), false);
    }

    /// Copy one cell from `source`, honouring this field's cloning policy.
    fn copy_cell_from(&mut self, source: &Self, src: Point, dst: Point) -> Result<(), FieldError> {
        let value = source.try_get(src.x, src.y)?;
        grid::check_point(self.extent(), dst.x, dst.y)?;
        let policy = self.resolved_cloning_policy();
        self.set(dst.x, dst.y, value.clone_with(policy));
        Ok(())
    }

    /// Copy a `size` rectangle at `src` in `source` to `dst` in `self`.
    ///
    /// `source` cannot be `self` here (the borrow checker rules it out);
    /// use [`copy_region_within`](CellField::copy_region_within) for
    /// copies inside one field.
    fn copy_region_from(
        &mut self,
        source: &Self,
        size: Extent,
        src: Point,
        dst: Point,
    ) -> Result<(), FieldError> {
        check_region(source.extent(), src, size)?;
        check_region(self.extent(), dst, size)?;
        let policy = self.resolved_cloning_policy();
        for dy in 0..size.height {
            for dx in 0..size.width {
                let v = source.get(src.x + dx, src.y + dy);
                self.set(dst.x + dx, dst.y + dy, v.clone_with(policy));
            }
        }
        Ok(())
    }

    /// Copy a `size` rectangle from `src` to `dst` inside this field.
    ///
    /// When the two rectangles overlap the values are staged through
    /// `scratch` (or a fresh buffer if `None`) so that no cell is read
    /// after it has been overwritten. Non-overlapping copies go direct.
    fn copy_region_within(
        &mut self,
        size: Extent,
        src: Point,
        dst: Point,
        scratch: Option<&mut Vec<Self::Value>>,
    ) -> Result<(), FieldError> {
        let extent = self.extent();
        check_region(extent, src, size)?;
        check_region(extent, dst, size)?;
        let policy = self.resolved_cloning_policy();

        if !geom::regions_overlap(size, src, dst) {
            for dy in 0..size.height {
                for dx in 0..size.width {
                    let v = self.get(src.x + dx, src.y + dy);
                    self.set(dst.x + dx, dst.y + dy, v.clone_with(policy));
                }
            }
            return Ok(());
        }

        let mut local = Vec::new();
        let staging = scratch.unwrap_or(&mut local);
        staging.clear();
        staging.reserve(size.cell_count());
        for dy in 0..size.height {
            for dx in 0..size.width {
                staging.push(self.get(src.x + dx, src.y + dy));
            }
        }
        let mut staged = staging.drain(..);
        for dy in 0..size.height {
            for dx in 0..size.width {
                if let Some(v) = staged.next() {
                    self.set(dst.x + dx, dst.y + dy, v.clone_with(policy));
                }
            }
        }
        Ok(())
    }

    /// A copy of this field resized to `width × height`.
    ///
    /// The top-left intersection of the two sizes is copied (honouring
    /// the cloning policy); any extra cells hold `Value::default()`.
    fn resized_clone(&self, width: u32, height: u32) -> Result<Self, FieldError> {
        let mut out = self.blank_like(width, height)?;
        out.set_cloning_policy(self.resolved_cloning_policy());
        let common = self.extent().intersect(out.extent());
        out.copy_region_from(self, common, Point::ORIGIN, Point::ORIGIN)?;
        Ok(out)
    }

    /// True if both fields have the same size and equal cells.
    fn same_cells(&self, other: &Self) -> bool {
        if self.extent() != other.extent() {
            return false;
        }
        let Extent { width, height } = self.extent();
        (0..height).all(|y| (0..width).all(|x| self.get(x, y) == other.get(x, y)))
    }

    /// True if any cell supports [`DeepClone::deep_clone`]; the
    /// `AutoDetect` probe.
    fn any_deep_cloneable(&self) -> bool {
        let Extent { width, height } = self.extent();
        (0..height).any(|y| (0..width).any(|x| self.get(x, y).supports_deep_clone()))
    }
}

fn fill_policy<F: CellField>(field: &F, deep: bool) -> CloningPolicy {
    if deep {
        field.resolved_cloning_policy()
    } else {
        CloningPolicy::DoNotTryDeepClone
    }
}

/// Check that a `size` region at `origin` fits inside `extent`.
pub fn check_region(extent: Extent, origin: Point, size: Extent) -> Result<(), FieldError> {
    let region = Rect::new(origin, size);
    if region.fits_in(extent) {
        Ok(())
    } else {
        Err(FieldError::RegionOutOfBounds { region, extent })
    }
}
