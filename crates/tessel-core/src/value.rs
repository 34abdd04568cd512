//! Value traits for cell contents.
//!
//! [`DeepClone`] replaces runtime "is this cloneable?" inspection with an
//! explicit capability on the value type. Plain-data types keep the
//! default (no deep clone, copy is already independent); shared-ownership
//! handles such as `Rc<T>` and `Arc<T>` opt in so that a deep copy
//! allocates a fresh, unaliased value.

use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

use crate::cloning::CloningPolicy;

/// A value that may offer a copy independent of shared state.
pub trait DeepClone: Clone {
    /// True if [`deep_clone`](DeepClone::deep_clone) produces something
    /// different from [`Clone::clone`] for this value.
    fn supports_deep_clone(&self) -> bool {
        false
    }

    /// An independent copy. Defaults to `clone()`.
    fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// Copy according to `policy`: deep when the policy asks for it and
    /// the value supports it, shallow otherwise.
    fn clone_with(&self, policy: CloningPolicy) -> Self {
        if policy.is_deep() && self.supports_deep_clone() {
            self.deep_clone()
        } else {
            self.clone()
        }
    }
}

macro_rules! plain_deep_clone {
    ($($t:ty),* $(,)?) => {
        $(impl DeepClone for $t {})*
    };
}

plain_deep_clone!(
    bool, char, (), u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32,
    f64, String,
);

impl<T: Clone> DeepClone for Rc<T> {
    fn supports_deep_clone(&self) -> bool {
        true
    }

    fn deep_clone(&self) -> Self {
        Rc::new(T::clone(self))
    }
}

impl<T: Clone> DeepClone for Arc<T> {
    fn supports_deep_clone(&self) -> bool {
        true
    }

    fn deep_clone(&self) -> Self {
        Arc::new(T::clone(self))
    }
}

impl<T: DeepClone> DeepClone for Option<T> {
    fn supports_deep_clone(&self) -> bool {
        self.as_ref().is_some_and(DeepClone::supports_deep_clone)
    }

    fn deep_clone(&self) -> Self {
        self.as_ref().map(DeepClone::deep_clone)
    }
}

/// Everything a field needs from its cell type.
///
/// `Default` is the empty (dead) value; fields pad and clear with it.
pub trait CellValue: DeepClone + Default + PartialEq + Debug {}

impl<T: DeepClone + Default + PartialEq + Debug> CellValue for T {}

/// Numeric view of a cell used by neighbour counting and summing.
pub trait Magnitude {
    /// The cell's weight in a neighbour sum.
    fn magnitude(&self) -> f64;

    /// True if the cell counts as alive in a neighbour count.
    fn is_live(&self) -> bool {
        self.magnitude() > 0.0
    }
}

impl Magnitude for bool {
    fn magnitude(&self) -> f64 {
        if *self {
            1.0
        } else {
            0.0
        }
    }

    fn is_live(&self) -> bool {
        *self
    }
}

macro_rules! numeric_magnitude {
    ($($t:ty),* $(,)?) => {
        $(impl Magnitude for $t {
            fn magnitude(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

numeric_magnitude!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
