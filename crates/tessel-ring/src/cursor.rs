//! Position/count bookkeeping for a circular window.
//!
//! The window is `(first, len)` over `[0, capacity)`: live slots are
//! `first, first + 1, ..., first + len - 1`, all modulo `capacity`. The
//! cursor never touches payloads; callers map the slot numbers it hands
//! out onto their own storage.

use std::ops::Range;

use smallvec::{smallvec, SmallVec};

use crate::error::RingError;
use crate::MIN_CAPACITY;

/// Where an insertion landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Claimed {
    /// Slot now holding the new entry.
    pub slot: usize,
    /// True if the window was full and the entry at the far end was
    /// dropped to make room.
    pub evicted: bool,
}

/// `(first, len)` window over `capacity` slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingCursor {
    first: usize,
    len: usize,
    capacity: usize,
}

impl RingCursor {
    /// An empty window over `capacity` slots.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity < MIN_CAPACITY {
            return Err(RingError::CapacityTooSmall {
                requested: capacity,
            });
        }
        Ok(Self {
            first: 0,
            len: 0,
            capacity,
        })
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no entry is live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if every slot is live.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Slot of logical index `i` (0 = oldest), if live.
    pub fn slot_of(&self, i: usize) -> Option<usize> {
        (i < self.len).then(|| (self.first + i) % self.capacity)
    }

    /// Slot of the oldest entry.
    pub fn first_slot(&self) -> Option<usize> {
        self.slot_of(0)
    }

    /// Slot of the newest entry.
    pub fn last_slot(&self) -> Option<usize> {
        self.len.checked_sub(1).and_then(|i| self.slot_of(i))
    }

    /// Live slots, oldest to newest.
    pub fn slots(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        (0..self.len).map(move |i| (self.first + i) % self.capacity)
    }

    /// True if `slot` is inside the live window.
    pub fn is_live(&self, slot: usize) -> bool {
        slot < self.capacity && (slot + self.capacity - self.first) % self.capacity < self.len
    }

    /// Claim a slot after the newest entry. When full the oldest entry
    /// is evicted and its slot reused.
    pub fn push_last(&mut self) -> Claimed {
        if self.is_full() {
            let slot = self.first;
            self.first = (self.first + 1) % self.capacity;
            Claimed {
                slot,
                evicted: true,
            }
        } else {
            let slot = (self.first + self.len) % self.capacity;
            self.len += 1;
            Claimed {
                slot,
                evicted: false,
            }
        }
    }

    /// Claim a slot before the oldest entry. When full the newest entry
    /// is evicted and its slot reused.
    pub fn push_first(&mut self) -> Claimed {
        let evicted = self.is_full();
        if !evicted {
            self.len += 1;
        }
        self.first = (self.first + self.capacity - 1) % self.capacity;
        Claimed {
            slot: self.first,
            evicted,
        }
    }

    /// Drop the newest entry, returning its slot.
    pub fn pop_last(&mut self) -> Option<usize> {
        let slot = self.last_slot()?;
        self.len -= 1;
        Some(slot)
    }

    /// Drop the oldest entry, returning its slot.
    pub fn pop_first(&mut self) -> Option<usize> {
        let slot = self.first_slot()?;
        self.first = (self.first + 1) % self.capacity;
        self.len -= 1;
        Some(slot)
    }

    /// Drop the `n` newest entries. All or nothing: returns `false` and
    /// leaves the window unchanged if fewer than `n` are live.
    pub fn pop_last_n(&mut self, n: usize) -> bool {
        if n > self.len {
            return false;
        }
        self.len -= n;
        true
    }

    /// Drop the `n` oldest entries. All or nothing, like
    /// [`pop_last_n`](RingCursor::pop_last_n).
    pub fn pop_first_n(&mut self, n: usize) -> bool {
        if n > self.len {
            return false;
        }
        self.first = (self.first + n) % self.capacity;
        self.len -= n;
        true
    }

    /// Collapse the window onto its newest entry. No-op when empty.
    pub fn retain_last(&mut self) {
        if self.len > 1 {
            self.first = (self.first + self.len - 1) % self.capacity;
            self.len = 1;
        }
    }

    /// Collapse the window onto its oldest entry. No-op when empty.
    pub fn retain_first(&mut self) {
        self.len = self.len.min(1);
    }

    /// Empty the window.
    pub fn clear(&mut self) {
        self.first = 0;
        self.len = 0;
    }

    /// Slot ranges outside the live window.
    ///
    /// An unwrapped window leaves a prefix and a suffix; a wrapped one
    /// leaves the single gap between its last and first slots. Empty
    /// ranges are omitted.
    pub fn unused_ranges(&self) -> SmallVec<[Range<usize>; 2]> {
        if self.len == 0 {
            return smallvec![0..self.capacity];
        }
        let end = self.first + self.len;
        let ranges: SmallVec<[Range<usize>; 2]> = if end <= self.capacity {
            smallvec![0..self.first, end..self.capacity]
        } else {
            smallvec![end - self.capacity..self.first]
        };
        ranges.into_iter().filter(|r| !r.is_empty()).collect()
    }
}
