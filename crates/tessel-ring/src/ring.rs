//! The slot-owning ring buffer.

use tracing::debug;

use crate::cursor::RingCursor;
use crate::end::{ResizeOptions, RingEnd};
use crate::error::RingError;
use crate::source::{DefaultSlots, SlotSource};

/// A circular buffer of `capacity` owned slots with a live window
/// addressed by logical index (0 = oldest).
///
/// Inserting at either end claims a slot through the [`RingCursor`]. A
/// claimed slot that still holds a stale payload is recycled: kept as is
/// when the caller does not ask for cleared content, reset in place via
/// [`SlotSource::reset`] when it does. Slots never used before are
/// filled by [`SlotSource::create`].
///
/// Inserting into a full ring evicts the entry at the opposite end.
/// Whether that is acceptable is the caller's decision.
///
/// # Examples
///
/// ```
/// use tessel_ring::RingBuffer;
///
/// let mut ring: RingBuffer<u32> = RingBuffer::new(3).unwrap();
/// for i in 1..=4 {
///     *ring.add_last(true) = i;
/// }
/// // 1 was evicted.
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Debug)]
pub struct RingBuffer<T, S = DefaultSlots> {
    cursor: RingCursor,
    slots: Vec<Option<T>>,
    source: S,
}

impl<T: Default> RingBuffer<T, DefaultSlots> {
    /// An empty ring whose new slots hold `T::default()`.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        Self::with_source(capacity, DefaultSlots)
    }
}

impl<T, S: SlotSource<T>> RingBuffer<T, S> {
    /// An empty ring filling new slots from `source`.
    pub fn with_source(capacity: usize, source: S) -> Result<Self, RingError> {
        let cursor = RingCursor::new(capacity)?;
        let slots = std::iter::repeat_with(|| None).take(capacity).collect();
        Ok(Self {
            cursor,
            slots,
            source,
        })
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// True if no entry is live.
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// True if `len() == capacity()`.
    pub fn is_full(&self) -> bool {
        self.cursor.is_full()
    }

    /// The window bookkeeping.
    pub fn cursor(&self) -> &RingCursor {
        &self.cursor
    }

    /// The slot factory.
    pub fn source(&self) -> &S {
        &self.source
    }

    // ── Insertion ───────────────────────────────────────────────

    /// Append after the newest entry, evicting the oldest if full.
    pub fn add_last(&mut self, clear: bool) -> &mut T {
        let claimed = self.cursor.push_last();
        self.fill_slot(claimed.slot, clear)
    }

    /// Prepend before the oldest entry, evicting the newest if full.
    pub fn add_first(&mut self, clear: bool) -> &mut T {
        let claimed = self.cursor.push_first();
        self.fill_slot(claimed.slot, clear)
    }

    /// Insert at `end`.
    pub fn add(&mut self, end: RingEnd, clear: bool) -> &mut T {
        match end {
            RingEnd::Oldest => self.add_first(clear),
            RingEnd::Newest => self.add_last(clear),
        }
    }

    fn fill_slot(&mut self, slot: usize, clear: bool) -> &mut T {
        let source = &self.source;
        let entry = &mut self.slots[slot];
        let value = match entry.take() {
            Some(mut stale) => {
                if clear {
                    source.reset(&mut stale);
                }
                stale
            }
            None => source.create(clear),
        };
        entry.insert(value)
    }

    // ── Removal ─────────────────────────────────────────────────

    /// Drop the newest entry. `false` if empty.
    pub fn remove_last(&mut self) -> bool {
        self.cursor.pop_last().is_some()
    }

    /// Drop the oldest entry. `false` if empty.
    pub fn remove_first(&mut self) -> bool {
        self.cursor.pop_first().is_some()
    }

    /// Drop the entry at `end`. `false` if empty.
    pub fn remove(&mut self, end: RingEnd) -> bool {
        match end {
            RingEnd::Oldest => self.remove_first(),
            RingEnd::Newest => self.remove_last(),
        }
    }

    /// Drop the `n` newest entries. All or nothing: `false` leaves the
    /// ring unchanged.
    pub fn remove_last_n(&mut self, n: usize) -> bool {
        self.cursor.pop_last_n(n)
    }

    /// Drop the `n` oldest entries. All or nothing.
    pub fn remove_first_n(&mut self, n: usize) -> bool {
        self.cursor.pop_first_n(n)
    }

    /// Drop `n` entries from `end`. All or nothing.
    pub fn remove_n(&mut self, n: usize, end: RingEnd) -> bool {
        match end {
            RingEnd::Oldest => self.remove_first_n(n),
            RingEnd::Newest => self.remove_last_n(n),
        }
    }

    /// Keep only the newest entry. O(1), no payload moves.
    pub fn remove_all_except_last(&mut self) {
        self.cursor.retain_last();
    }

    /// Keep only the oldest entry. O(1), no payload moves.
    pub fn remove_all_except_first(&mut self) {
        self.cursor.retain_first();
    }

    /// Drop every entry. Payloads stay allocated until overwritten or
    /// reclaimed.
    pub fn remove_all(&mut self) {
        self.cursor.clear();
    }

    /// Release the payloads of every slot outside the live window.
    /// Returns how many payloads were dropped.
    pub fn reclaim_unused_slots(&mut self) -> usize {
        let mut dropped = 0;
        for range in self.cursor.unused_ranges() {
            for slot in &mut self.slots[range] {
                if slot.take().is_some() {
                    dropped += 1;
                }
            }
        }
        if dropped > 0 {
            debug!(dropped, capacity = self.capacity(), "reclaimed stale ring slots");
        }
        dropped
    }

    // ── Access ──────────────────────────────────────────────────

    fn live_slot(&self, index: usize) -> Result<usize, RingError> {
        self.cursor.slot_of(index).ok_or(RingError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Entry at logical `index` (0 = oldest).
    pub fn get(&self, index: usize) -> Result<&T, RingError> {
        let slot = self.live_slot(index)?;
        self.slots[slot].as_ref().ok_or(RingError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Mutable entry at logical `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, RingError> {
        let slot = self.live_slot(index)?;
        let len = self.len();
        self.slots[slot]
            .as_mut()
            .ok_or(RingError::IndexOutOfRange { index, len })
    }

    /// Replace the entry at logical `index`, returning the old one.
    /// The value must pass [`SlotSource::check`].
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, RingError> {
        let slot = self.live_slot(index)?;
        self.source.check(&value)?;
        Ok(self.slots[slot].replace(value))
    }

    /// The oldest entry.
    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// The second-oldest entry.
    pub fn second(&self) -> Option<&T> {
        self.get(1).ok()
    }

    /// The newest entry.
    pub fn last(&self) -> Option<&T> {
        self.get(self.len().checked_sub(1)?).ok()
    }

    /// The newest entry, mutably.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        let i = self.len().checked_sub(1)?;
        self.get_mut(i).ok()
    }

    /// The entry just before the newest.
    pub fn previous(&self) -> Option<&T> {
        self.get(self.len().checked_sub(2)?).ok()
    }

    /// The entry before the newest (shared) and the newest (mutable).
    /// `None` with fewer than two entries.
    pub fn last_two_mut(&mut self) -> Option<(&T, &mut T)> {
        let len = self.len();
        let prev = self.cursor.slot_of(len.checked_sub(2)?)?;
        let last = self.cursor.slot_of(len - 1)?;
        let (prev, last) = if prev < last {
            let (lo, hi) = self.slots.split_at_mut(last);
            (&lo[prev], &mut hi[0])
        } else {
            let (lo, hi) = self.slots.split_at_mut(prev);
            (&hi[0], &mut lo[last])
        };
        Some((prev.as_ref()?, last.as_mut()?))
    }

    /// Live entries, oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.cursor
            .slots()
            .filter_map(move |slot| self.slots[slot].as_ref())
    }

    // ── Resizing ────────────────────────────────────────────────

    /// Change the capacity in place, moving as many entries as fit.
    ///
    /// Entries are taken from `options.keep` and keep their relative
    /// order; the new window starts at slot 0. Stale payloads are
    /// dropped. On error the ring is left untouched.
    pub fn resize_capacity(
        &mut self,
        capacity: usize,
        options: ResizeOptions,
    ) -> Result<(), RingError> {
        let cursor = RingCursor::new(capacity)?;
        let old_capacity = self.capacity();
        let entries = self.take_retained(capacity, options.keep);
        self.cursor = cursor;
        self.slots = std::iter::repeat_with(|| None).take(capacity).collect();
        for value in entries {
            let claimed = self.cursor.push_last();
            self.slots[claimed.slot] = Some(value);
        }
        debug!(
            from = old_capacity,
            to = capacity,
            kept = self.len(),
            "ring capacity changed"
        );
        Ok(())
    }

    /// Move out up to `limit` live entries from `keep`, oldest first,
    /// leaving the ring empty.
    fn take_retained(&mut self, limit: usize, keep: RingEnd) -> Vec<T> {
        let len = self.len();
        let kept = len.min(limit);
        let skip = match keep {
            RingEnd::Oldest => 0,
            RingEnd::Newest => len - kept,
        };
        let live: Vec<usize> = self.cursor.slots().skip(skip).take(kept).collect();
        self.cursor.clear();
        live.into_iter()
            .filter_map(|slot| self.slots[slot].take())
            .collect()
    }
}

impl<T: Clone, S: Clone> Clone for RingBuffer<T, S> {
    /// Copies the live window only; stale slots are left empty.
    fn clone(&self) -> Self {
        let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None)
            .take(self.slots.len())
            .collect();
        for slot in self.cursor.slots() {
            slots[slot] = self.slots[slot].clone();
        }
        Self {
            cursor: self.cursor,
            slots,
            source: self.source.clone(),
        }
    }
}
