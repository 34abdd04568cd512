//! Execution context passed to rules.

use tessel_field::{CellField, EdgeBehavior};

/// Split-borrow view handed to [`Rule::step`](crate::Rule::step).
///
/// `previous` is the newest retained generation and is read-only;
/// `next` is the slot the driver claimed for the generation being
/// computed. `next` may hold stale content from a recycled slot, so a
/// rule must write every cell it cares about.
pub struct RuleContext<'a, F> {
    previous: &'a F,
    next: &'a mut F,
    edge: EdgeBehavior,
    generation: u64,
}

impl<'a, F: CellField> RuleContext<'a, F> {
    /// Construct a context. Normally called by the driver.
    pub fn new(previous: &'a F, next: &'a mut F, edge: EdgeBehavior, generation: u64) -> Self {
        Self {
            previous,
            next,
            edge,
            generation,
        }
    }

    /// The generation being stepped from.
    pub fn previous(&self) -> &F {
        self.previous
    }

    /// The generation being written.
    pub fn next(&mut self) -> &mut F {
        self.next
    }

    /// Both fields at once.
    pub fn split(&mut self) -> (&F, &mut F) {
        (self.previous, &mut *self.next)
    }

    /// Border handling configured on the driver.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// Id of the generation being written.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply `f(previous_field, x, y)` to every cell and write the result
    /// into the next generation.
    pub fn map_cells(&mut self, mut f: impl FnMut(&F, u32, u32) -> F::Value) {
        let (previous, next) = self.split();
        for y in 0..previous.height() {
            for x in 0..previous.width() {
                next.set(x, y, f(previous, x, y));
            }
        }
    }
}
