//! Edge (boundary) behaviour for neighbour queries.

/// How neighbour queries treat cells on the border of a field.
///
/// # Examples
///
/// ```
/// use tessel_field::{live_neighbour_count, CellField, DenseField, EdgeBehavior};
///
/// let mut f = DenseField::<bool>::new(4, 4).unwrap();
/// f.set(3, 0, true);
/// // (0, 0) sees (3, 0) only across the wrapped edge.
/// assert_eq!(live_neighbour_count(&f, 0, 0, EdgeBehavior::Wrap), 1);
/// assert_eq!(live_neighbour_count(&f, 0, 0, EdgeBehavior::Absorb), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Opposite edges are identified (torus).
    #[default]
    Wrap,
    /// Out-of-bounds neighbours do not exist; callers substitute an
    /// outside value or skip them.
    Absorb,
}

impl EdgeBehavior {
    /// `Wrap` when `wrap` is true, else `Absorb`.
    pub const fn from_wrap(wrap: bool) -> Self {
        if wrap {
            EdgeBehavior::Wrap
        } else {
            EdgeBehavior::Absorb
        }
    }

    /// True for [`EdgeBehavior::Wrap`].
    pub const fn wraps(self) -> bool {
        matches!(self, EdgeBehavior::Wrap)
    }
}
