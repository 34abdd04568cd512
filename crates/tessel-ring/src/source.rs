//! Factories for freshly claimed ring slots.

use crate::error::RingError;

/// Supplies and validates the payloads of a [`RingBuffer`](crate::RingBuffer).
pub trait SlotSource<T> {
    /// A new payload. `cleared` asks for default ("empty") content;
    /// otherwise the source may return any prototype content.
    fn create(&self, cleared: bool) -> T;

    /// Reset a recycled payload to default content in place.
    fn reset(&self, value: &mut T) {
        *value = self.create(true);
    }

    /// Reject values that may not be stored in this ring.
    fn check(&self, _value: &T) -> Result<(), RingError> {
        Ok(())
    }
}

/// Fills new slots with `T::default()` and accepts any value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultSlots;

impl<T: Default> SlotSource<T> for DefaultSlots {
    fn create(&self, _cleared: bool) -> T {
        T::default()
    }
}
