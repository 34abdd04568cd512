//! Reusable rule fixtures.
//!
//! - [`StampRule`] writes the generation id into every cell.
//! - [`CopyRule`] copies the previous generation unchanged.
//! - [`FailingRule`] stamps like [`StampRule`] but fails at one generation.

use tessel_core::RuleError;
use tessel_field::CellField;
use tessel_rule::{Rule, RuleContext};

/// Fills every cell of the next generation with its generation id.
///
/// Makes the ring contents self-describing: generation `n` reads `n`
/// everywhere, so eviction and rewind tests can check exactly which
/// generations survived.
#[derive(Clone, Copy, Debug, Default)]
pub struct StampRule;

impl<F: CellField<Value = u32>> Rule<F> for StampRule {
    fn name(&self) -> &str {
        "stamp"
    }

    fn step(&self, ctx: &mut RuleContext<'_, F>) -> Result<(), RuleError> {
        let stamp = ctx.generation() as u32;
        ctx.next().fill_all(stamp, false);
        Ok(())
    }
}

/// Copies the previous generation into the next one.
#[derive(Clone, Copy, Debug, Default)]
pub struct CopyRule;

impl<F: CellField> Rule<F> for CopyRule {
    fn name(&self) -> &str {
        "copy"
    }

    fn step(&self, ctx: &mut RuleContext<'_, F>) -> Result<(), RuleError> {
        ctx.map_cells(|prev, x, y| prev.get(x, y));
        Ok(())
    }
}

/// Stamps like [`StampRule`], except at generation `fail_at` where it
/// scribbles over the claimed slot and then fails.
///
/// The scribble lets tests check that a failed step leaves no trace in
/// the retained generations.
#[derive(Clone, Copy, Debug)]
pub struct FailingRule {
    pub fail_at: u64,
}

impl FailingRule {
    pub fn at(fail_at: u64) -> Self {
        Self { fail_at }
    }
}

impl<F: CellField<Value = u32>> Rule<F> for FailingRule {
    fn name(&self) -> &str {
        "failing"
    }

    fn step(&self, ctx: &mut RuleContext<'_, F>) -> Result<(), RuleError> {
        let generation = ctx.generation();
        if generation == self.fail_at {
            ctx.next().fill_all(u32::MAX, false);
            return Err(RuleError::ExecutionFailed {
                reason: format!("refusing generation {generation}"),
            });
        }
        ctx.next().fill_all(generation as u32, false);
        Ok(())
    }
}
