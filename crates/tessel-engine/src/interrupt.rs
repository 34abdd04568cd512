//! Pollable interruption signals for long fast-forwards.

use std::sync::atomic::{AtomicBool, Ordering};

/// Polled by [`Simulation::go_to_gen`](crate::Simulation::go_to_gen)
/// between generations; never mid-generation.
pub trait Interrupt {
    /// True if the caller wants the run to stop.
    fn is_interrupted(&self) -> bool;
}

/// Never interrupts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverInterrupt;

impl Interrupt for NeverInterrupt {
    fn is_interrupted(&self) -> bool {
        false
    }
}

/// A flag set from elsewhere, e.g. a signal handler.
impl Interrupt for AtomicBool {
    fn is_interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Adapts a closure.
#[derive(Clone, Copy, Debug)]
pub struct FnInterrupt<F>(pub F);

impl<F: Fn() -> bool> Interrupt for FnInterrupt<F> {
    fn is_interrupted(&self) -> bool {
        (self.0)()
    }
}

impl<T: Interrupt + ?Sized> Interrupt for &T {
    fn is_interrupted(&self) -> bool {
        (**self).is_interrupted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn sources() {
        assert!(!NeverInterrupt.is_interrupted());
        let flag = AtomicBool::new(false);
        assert!(!flag.is_interrupted());
        flag.store(true, Ordering::Relaxed);
        let by_ref: &dyn Interrupt = &flag;
        assert!(by_ref.is_interrupted());

        let polls = Cell::new(0);
        let f = FnInterrupt(|| {
            polls.set(polls.get() + 1);
            polls.get() > 2
        });
        assert!(!f.is_interrupted());
        assert!(!f.is_interrupted());
        assert!(f.is_interrupted());
    }
}
