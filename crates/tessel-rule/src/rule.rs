//! The [`Rule`] trait.

use tessel_core::RuleError;
use tessel_field::CellField;

use crate::context::RuleContext;
use crate::param::RuleParam;

/// A rule kernel: computes generation `n + 1` from generation `n`.
///
/// # Contract
///
/// - `step()` is deterministic: equal previous fields give equal next
///   fields.
/// - `&self`: per-step state lives in the fields; only parameters are
///   mutable, through [`set_param`](Rule::set_param).
/// - `step()` must write every cell of `ctx.next()` whose value it does
///   not want inherited from a recycled slot.
///
/// # Examples
///
/// ```
/// use tessel_field::{CellField, DenseField, EdgeBehavior};
/// use tessel_rule::{Rule, RuleContext, RuleError};
///
/// struct Invert;
///
/// impl Rule<DenseField<bool>> for Invert {
///     fn name(&self) -> &str { "invert" }
///
///     fn step(&self, ctx: &mut RuleContext<'_, DenseField<bool>>) -> Result<(), RuleError> {
///         ctx.map_cells(|prev, x, y| !prev.get(x, y));
///         Ok(())
///     }
/// }
///
/// let prev = DenseField::<bool>::new(2, 2).unwrap();
/// let mut next = prev.clone();
/// Invert.step(&mut RuleContext::new(&prev, &mut next, EdgeBehavior::Wrap, 1)).unwrap();
/// assert!(next.get(1, 1));
/// ```
pub trait Rule<F: CellField> {
    /// Human-readable name for error reporting and logs.
    fn name(&self) -> &str;

    /// Tunable parameters. Empty by default.
    fn params(&self) -> &[RuleParam] {
        &[]
    }

    /// Change a parameter by name.
    fn set_param(&mut self, name: &str, _value: i64) -> Result<(), RuleError> {
        Err(RuleError::UnknownParam {
            name: name.to_string(),
        })
    }

    /// Compute the next generation.
    fn step(&self, ctx: &mut RuleContext<'_, F>) -> Result<(), RuleError>;
}

impl<F: CellField, R: Rule<F> + ?Sized> Rule<F> for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn params(&self) -> &[RuleParam] {
        (**self).params()
    }

    fn set_param(&mut self, name: &str, value: i64) -> Result<(), RuleError> {
        (**self).set_param(name, value)
    }

    fn step(&self, ctx: &mut RuleContext<'_, F>) -> Result<(), RuleError> {
        (**self).step(ctx)
    }
}
