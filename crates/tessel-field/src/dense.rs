//! Row-major dense storage.

use tessel_core::{CellValue, CloningPolicy, DeepClone, Extent};

use crate::error::FieldError;
use crate::field::CellField;
use crate::grid;
use crate::policy::PolicyCell;

/// A field backed by a row-major `Vec<V>`.
///
/// O(1) access with plain index arithmetic; the default backend.
///
/// # Examples
///
/// ```
/// use tessel_field::{CellField, DenseField};
/// use tessel_core::Direction;
///
/// let mut f = DenseField::<u8>::new(3, 2).unwrap();
/// f.set(2, 1, 9);
/// assert_eq!(f.get_with_wrap(0, 0, Direction::NorthWest), 9);
/// ```
#[derive(Debug)]
pub struct DenseField<V> {
    extent: Extent,
    cells: Vec<V>,
    policy: PolicyCell,
}

impl<V: CellValue> DenseField<V> {
    /// A `width × height` field of `V::default()` with the default
    /// cloning policy.
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        Self::with_policy(width, height, CloningPolicy::default())
    }

    /// A `width × height` field of `V::default()` with `policy`.
    pub fn with_policy(
        width: u32,
        height: u32,
        policy: CloningPolicy,
    ) -> Result<Self, FieldError> {
        let extent = grid::check_dims(width, height)?;
        let cells = std::iter::repeat_with(V::default)
            .take(extent.cell_count())
            .collect();
        Ok(Self {
            extent,
            cells,
            policy: PolicyCell::new(policy),
        })
    }

    /// Build from row-major values. `cells.len()` must equal
    /// `width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<V>) -> Result<Self, FieldError> {
        let extent = grid::check_dims(width, height)?;
        if cells.len() != extent.cell_count() {
            return Err(FieldError::CellCountMismatch {
                expected: extent.cell_count(),
                found: cells.len(),
            });
        }
        Ok(Self {
            extent,
            cells,
            policy: PolicyCell::default(),
        })
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[V] {
        &self.cells
    }

    /// Mutable row-major view of all cells.
    pub fn cells_mut(&mut self) -> &mut [V] {
        &mut self.cells
    }

    /// Borrow the cell at `(x, y)`.
    pub fn cell(&self, x: u32, y: u32) -> &V {
        self.debug_check(x, y);
        &self.cells[grid::flat_index(x, y, self.extent.width)]
    }

    #[inline]
    fn debug_check(&self, x: u32, y: u32) {
        debug_assert!(
            x < self.extent.width && y < self.extent.height,
            "({x}, {y}) outside {} field",
            self.extent
        );
    }
}

impl<V: CellValue> Clone for DenseField<V> {
    fn clone(&self) -> Self {
        let policy = self.resolved_cloning_policy();
        Self {
            extent: self.extent,
            cells: self.cells.iter().map(|v| v.clone_with(policy)).collect(),
            policy: PolicyCell::new(policy),
        }
    }
}

impl<V: CellValue> PartialEq for DenseField<V> {
    fn eq(&self, other: &Self) -> bool {
        self.extent == other.extent && self.cells == other.cells
    }
}

impl<V: CellValue> CellField for DenseField<V> {
    type Value = V;

    fn extent(&self) -> Extent {
        self.extent
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> V {
        self.cell(x, y).clone()
    }

    #[inline]
    fn set(&mut self, x: u32, y: u32, value: V) {
        self.debug_check(x, y);
        let i = grid::flat_index(x, y, self.extent.width);
        self.cells[i] = value;
    }

    fn blank_like(&self, width: u32, height: u32) -> Result<Self, FieldError> {
        Self::with_policy(width, height, self.policy.get())
    }

    fn cloning_policy(&self) -> CloningPolicy {
        self.policy.get()
    }

    fn set_cloning_policy(&mut self, policy: CloningPolicy) {
        self.policy.set(policy);
    }

    fn resolved_cloning_policy(&self) -> CloningPolicy {
        self.policy
            .resolve(|| self.cells.iter().any(DeepClone::supports_deep_clone))
    }

    fn any_deep_cloneable(&self) -> bool {
        self.cells.iter().any(DeepClone::supports_deep_clone)
    }
}
