//! Which end of the window an operation applies to.

/// One end of a ring buffer's live window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RingEnd {
    /// The first (oldest) entry.
    Oldest,
    /// The last (newest) entry.
    #[default]
    Newest,
}

/// How a resize decides what to keep when not every entry fits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeOptions {
    /// Entries are kept starting from this end. Relative order is
    /// always preserved. Default: [`RingEnd::Newest`].
    pub keep: RingEnd,
}

impl ResizeOptions {
    /// Keep entries starting from `end`.
    pub const fn keep(end: RingEnd) -> Self {
        Self { keep: end }
    }
}
