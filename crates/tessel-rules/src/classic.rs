//! Conway's Game of Life with adjustable thresholds.
//!
//! A dead cell with exactly three live neighbours is born. A live cell
//! survives while its live-neighbour count `n` satisfies
//! `survive_min <= n < overpop_min`. The defaults (2, 4) give the classic
//! B3/S23 rule.

use tessel_core::{Magnitude, RuleError};
use tessel_field::{live_neighbour_count, CellField};
use tessel_rule::{param, Rule, RuleContext, RuleParam};

/// Parameter name for the minimum neighbour count needed to survive.
pub const SURVIVE_MIN: &str = "survive_min";
/// Parameter name for the neighbour count where overpopulation starts.
pub const OVERPOP_MIN: &str = "overpop_min";

const BIRTH: u32 = 3;

/// Conway's rule over any field whose cells can be counted as live.
#[derive(Clone, Debug)]
pub struct ClassicLife {
    params: Vec<RuleParam>,
}

impl ClassicLife {
    /// The classic B3/S23 rule.
    pub fn new() -> Self {
        Self {
            params: vec![
                RuleParam::clamped(SURVIVE_MIN, "min number of neighbours to survive", 0, 8, 2),
                RuleParam::clamped(
                    OVERPOP_MIN,
                    "min number of neighbours for overpopulation",
                    1,
                    9,
                    4,
                ),
            ],
        }
    }

    /// Current `(survive_min, overpop_min)`.
    pub fn thresholds(&self) -> (u32, u32) {
        let survive = param::get_named(&self.params, SURVIVE_MIN).unwrap_or(2);
        let overpop = param::get_named(&self.params, OVERPOP_MIN).unwrap_or(4);
        (survive as u32, overpop as u32)
    }

    /// Next state of one cell given its current state and neighbour count.
    pub fn next_state(&self, alive: bool, neighbours: u32) -> bool {
        let (survive, overpop) = self.thresholds();
        if alive {
            neighbours >= survive && neighbours < overpop
        } else {
            neighbours == BIRTH
        }
    }
}

impl Default for ClassicLife {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Rule<F> for ClassicLife
where
    F: CellField,
    F::Value: Magnitude + From<bool>,
{
    fn name(&self) -> &str {
        "classic_life"
    }

    fn params(&self) -> &[RuleParam] {
        &self.params
    }

    fn set_param(&mut self, name: &str, value: i64) -> Result<(), RuleError> {
        param::set_named(&mut self.params, name, value)
    }

    fn step(&self, ctx: &mut RuleContext<'_, F>) -> Result<(), RuleError> {
        let edge = ctx.edge();
        ctx.map_cells(|prev, x, y| {
            let alive = prev.get(x, y).is_live();
            let n = live_neighbour_count(prev, x, y, edge);
            F::Value::from(self.next_state(alive, n))
        });
        Ok(())
    }
}
