//! Runtime backend selection.
//!
//! The storage strategy is a constructor argument: pick a [`Storage`] or
//! [`BinaryStorage`] and get a field enum that dispatches to the chosen
//! backend.

use tessel_core::{CellValue, CloningPolicy, Direction, Extent};

use crate::bits::BitField;
use crate::dense::DenseField;
use crate::error::FieldError;
use crate::field::CellField;
use crate::mesh::MeshField;

/// Backend for generic-valued fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Storage {
    /// [`DenseField`].
    #[default]
    Dense,
    /// [`MeshField`].
    Mesh,
}

/// Backend for binary fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BinaryStorage {
    /// [`BitField`].
    #[default]
    Packed,
    /// [`DenseField<bool>`].
    Dense,
    /// [`MeshField<bool>`].
    Mesh,
}

/// A generic-valued field whose backend was chosen at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum GenericField<V: CellValue> {
    /// Dense backend.
    Dense(DenseField<V>),
    /// Mesh backend.
    Mesh(MeshField<V>),
}

/// A binary field whose backend was chosen at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum BinaryField {
    /// Bit-packed backend.
    Packed(BitField),
    /// Dense backend.
    Dense(DenseField<bool>),
    /// Mesh backend.
    Mesh(MeshField<bool>),
}

impl<V: CellValue> GenericField<V> {
    /// A default-filled `width × height` field using `storage`.
    pub fn new(storage: Storage, width: u32, height: u32) -> Result<Self, FieldError> {
        Ok(match storage {
            Storage::Dense => Self::Dense(DenseField::new(width, height)?),
            Storage::Mesh => Self::Mesh(MeshField::new(width, height)?),
        })
    }

    /// The backend in use.
    pub fn storage(&self) -> Storage {
        match self {
            Self::Dense(_) => Storage::Dense,
            Self::Mesh(_) => Storage::Mesh,
        }
    }
}

impl BinaryField {
    /// An all-`false` `width × height` field using `storage`.
    pub fn new(storage: BinaryStorage, width: u32, height: u32) -> Result<Self, FieldError> {
        Ok(match storage {
            BinaryStorage::Packed => Self::Packed(BitField::new(width, height)?),
            BinaryStorage::Dense => Self::Dense(DenseField::new(width, height)?),
            BinaryStorage::Mesh => Self::Mesh(MeshField::new(width, height)?),
        })
    }

    /// The backend in use.
    pub fn storage(&self) -> BinaryStorage {
        match self {
            Self::Packed(_) => BinaryStorage::Packed,
            Self::Dense(_) => BinaryStorage::Dense,
            Self::Mesh(_) => BinaryStorage::Mesh,
        }
    }
}

/// Forward a method call to whichever backend the enum holds.
macro_rules! dispatch {
    ($self:expr, $f:ident => $body:expr, [$($variant:ident),+]) => {
        match $self {
            $(Self::$variant($f) => $body,)+
        }
    };
}

/// Implement [`CellField`] for a backend enum by delegation.
macro_rules! delegate_cell_field {
    (impl$([$($gen:tt)*])? for $ty:ty, value = $v:ty, [$($variant:ident),+]) => {
        impl$(<$($gen)*>)? CellField for $ty {
            type Value = $v;

            fn extent(&self) -> Extent {
                dispatch!(self, f => f.extent(), [$($variant),+])
            }

            #[inline]
            fn get(&self, x: u32, y: u32) -> $v {
                dispatch!(self, f => f.get(x, y), [$($variant),+])
            }

            #[inline]
            fn set(&mut self, x: u32, y: u32, value: $v) {
                dispatch!(self, f => f.set(x, y, value), [$($variant),+])
            }

            #[inline]
            fn get_with_wrap(&self, x: u32, y: u32, dir: Direction) -> $v {
                dispatch!(self, f => f.get_with_wrap(x, y, dir), [$($variant),+])
            }

            fn blank_like(&self, width: u32, height: u32) -> Result<Self, FieldError> {
                Ok(dispatch!(self, f => Self::from(f.blank_like(width, height)?), [$($variant),+]))
            }

            fn cloning_policy(&self) -> CloningPolicy {
                dispatch!(self, f => f.cloning_policy(), [$($variant),+])
            }

            fn set_cloning_policy(&mut self, policy: CloningPolicy) {
                dispatch!(self, f => f.set_cloning_policy(policy), [$($variant),+])
            }

            fn resolved_cloning_policy(&self) -> CloningPolicy {
                dispatch!(self, f => f.resolved_cloning_policy(), [$($variant),+])
            }

            fn fill_all(&mut self, value: $v, deep: bool) {
                dispatch!(self, f => f.fill_all(value, deep), [$($variant),+])
            }

            fn fill_empty(&mut self, value: $v, deep: bool) {
                dispatch!(self, f => f.fill_empty(value, deep), [$($variant),+])
            }

            fn any_deep_cloneable(&self) -> bool {
                dispatch!(self, f => f.any_deep_cloneable(), [$($variant),+])
            }
        }
    };
}

delegate_cell_field!(impl[V: CellValue] for GenericField<V>, value = V, [Dense, Mesh]);
delegate_cell_field!(impl for BinaryField, value = bool, [Packed, Dense, Mesh]);

impl<V: CellValue> From<DenseField<V>> for GenericField<V> {
    fn from(f: DenseField<V>) -> Self {
        Self::Dense(f)
    }
}

impl<V: CellValue> From<MeshField<V>> for GenericField<V> {
    fn from(f: MeshField<V>) -> Self {
        Self::Mesh(f)
    }
}

impl From<BitField> for BinaryField {
    fn from(f: BitField) -> Self {
        Self::Packed(f)
    }
}

impl From<DenseField<bool>> for BinaryField {
    fn from(f: DenseField<bool>) -> Self {
        Self::Dense(f)
    }
}

impl From<MeshField<bool>> for BinaryField {
    fn from(f: MeshField<bool>) -> Self {
        Self::Mesh(f)
    }
}
