//! Byte-valued decay.
//!
//! Each live cell loses `rate` per generation, reduced by `stabilization`
//! for every live neighbour. Dead cells (0) stay dead.

use tessel_core::RuleError;
use tessel_field::{live_neighbour_count, CellField};
use tessel_rule::{param, Rule, RuleContext, RuleParam};

/// Parameter name for the decay per generation.
pub const RATE: &str = "rate";
/// Parameter name for the decay reduction per live neighbour.
pub const STABILIZATION: &str = "stabilization";

/// Decay rule over `u8` cells.
#[derive(Clone, Debug)]
pub struct Decay {
    params: Vec<RuleParam>,
}

impl Decay {
    /// Rate 10, stabilization 3.
    pub fn new() -> Self {
        Self {
            params: vec![
                RuleParam::clamped(RATE, "how quickly decay takes place", 1, 255, 10),
                RuleParam::clamped(
                    STABILIZATION,
                    "each living neighbour reduces the decay rate by this much",
                    0,
                    255,
                    3,
                ),
            ],
        }
    }

    /// Next value of a cell holding `value` with `neighbours` live
    /// neighbours.
    pub fn next_value(&self, value: u8, neighbours: u32) -> u8 {
        if value == 0 {
            return 0;
        }
        let rate = param::get_named(&self.params, RATE).unwrap_or(10) as u32;
        let stab = param::get_named(&self.params, STABILIZATION).unwrap_or(3) as u32;
        let decay = rate - (neighbours * stab).min(rate);
        value.saturating_sub(decay.min(u8::MAX as u32) as u8)
    }
}

impl Default for Decay {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: CellField<Value = u8>> Rule<F> for Decay {
    fn name(&self) -> &str {
        "decay"
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
            let value = prev.get(x, y);
            if value == 0 {
                return 0;
            }
            self.next_value(value, live_neighbour_count(prev, x, y, edge))
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tessel_field::{DenseField, EdgeBehavior};

    #[test]
    fn isolated_cell_decays_by_rate() {
        let decay = Decay::new();
        assert_eq!(decay.next_value(100, 0), 90);
        assert_eq!(decay.next_value(7, 0), 0);
        assert_eq!(decay.next_value(0, 8), 0);
    }

    #[test]
    fn neighbours_slow_decay() {
        let decay = Decay::new();
        assert_eq!(decay.next_value(100, 1), 93);
        assert_eq!(decay.next_value(100, 3), 99);
        assert_eq!(decay.next_value(100, 4), 100);
    }

    #[test]
    fn step_over_field() {
        let mut prev = DenseField::<u8>::new(3, 1).unwrap();
        prev.set(0, 0, 50);
        prev.set(1, 0, 5);
        let mut next = DenseField::<u8>::new(3, 1).unwrap();
        next.fill_all(9, false);
        let mut ctx = RuleContext::new(&prev, &mut next, EdgeBehavior::Absorb, 1);
        Decay::new().step(&mut ctx).unwrap();
        assert_eq!(next.cells(), &[43, 0, 0]);
    }

    #[test]
    fn rate_param_range() {
        let mut decay = Decay::new();
        assert!(Rule::<DenseField<u8>>::set_param(&mut decay, RATE, 0).is_err());
        Rule::<DenseField<u8>>::set_param(&mut decay, RATE, 255).unwrap();
        assert_eq!(decay.next_value(255, 0), 0);
    }

    proptest! {
        #[test]
        fn never_grows(value in any::<u8>(), n in 0u32..=8) {
            let decay = Decay::new();
            prop_assert!(decay.next_value(value, n) <= value);
        }
    }
}
