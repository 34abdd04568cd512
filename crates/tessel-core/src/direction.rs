//! The eight compass directions.
//!
//! Screen convention: `x` grows east, `y` grows south, so
//! [`Direction::North`] has offset `(0, -1)`.

/// One of the eight neighbour directions of a grid cell.
///
/// The discriminant doubles as the mesh-link index (see
/// [`Direction::index`]), so the declaration order is part of the contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, -1)`
    North,
    /// `(1, -1)`
    NorthEast,
    /// `(1, 0)`
    East,
    /// `(1, 1)`
    SouthEast,
    /// `(0, 1)`
    South,
    /// `(-1, 1)`
    SouthWest,
    /// `(-1, 0)`
    West,
    /// `(-1, -1)`
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit offset `(dx, dy)` of this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Direction::index`].
    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_declaration_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i), Some(*dir));
        }
        assert_eq!(Direction::from_index(8), None);
    }

    #[test]
    fn offsets_are_unit_and_distinct() {
        let mut seen = Vec::new();
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert_ne!((dx, dy), (0, 0));
            assert!(!seen.contains(&(dx, dy)), "{dir:?} duplicates an offset");
            seen.push((dx, dy));
        }
    }

    #[test]
    fn opposite_negates_offset() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            assert_eq!(dir.opposite().offset(), (-dx, -dy));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn north_points_up() {
        assert_eq!(Direction::North.offset(), (0, -1));
        assert_eq!(Direction::SouthEast.offset(), (1, 1));
    }
}
