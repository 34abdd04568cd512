//! Neighbour counting and summing for rule kernels.
//!
//! All helpers visit the eight [`Direction`]s through
//! [`CellField::neighbour`], so mesh backends get their precomputed links.

use smallvec::SmallVec;
use tessel_core::{Direction, Magnitude};

use crate::edge::EdgeBehavior;
use crate::field::CellField;

/// The neighbours of `(x, y)` that exist under `edge`, with their direction.
pub fn neighbours<F: CellField>(
    field: &F,
    x: u32,
    y: u32,
    edge: EdgeBehavior,
) -> SmallVec<[(Direction, F::Value); 8]> {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| field.neighbour(x, y, dir, edge).map(|v| (dir, v)))
        .collect()
}

/// Number of live neighbours of `(x, y)`.
///
/// A binary cell is live when `true`; a numeric cell when positive.
/// Under [`EdgeBehavior::Absorb`] cells past the border count as dead.
pub fn live_neighbour_count<F>(field: &F, x: u32, y: u32, edge: EdgeBehavior) -> u32
where
    F: CellField,
    F::Value: Magnitude,
{
    Direction::ALL
        .into_iter()
        .filter(|&dir| {
            field
                .neighbour(x, y, dir, edge)
                .is_some_and(|v| v.is_live())
        })
        .count() as u32
}

/// Sum of the magnitudes of the eight neighbours of `(x, y)`.
///
/// Under [`EdgeBehavior::Absorb`] each missing neighbour contributes
/// `outside` instead.
pub fn neighbour_sum<F>(field: &F, x: u32, y: u32, edge: EdgeBehavior, outside: f64) -> f64
where
    F: CellField,
    F::Value: Magnitude,
{
    Direction::ALL
        .into_iter()
        .map(|dir| {
            field
                .neighbour(x, y, dir, edge)
                .map_or(outside, |v| v.magnitude())
        })
        .sum()
}
