//! Lazily resolved cloning policy storage.

use std::cell::Cell;

use tessel_core::CloningPolicy;

/// Holds a field's [`CloningPolicy`], resolving `AutoDetect` on first use.
///
/// Resolution happens through a shared reference (clones take `&self`),
/// so the cached outcome lives in a [`Cell`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PolicyCell(Cell<CloningPolicy>);

impl PolicyCell {
    /// Store `policy` unresolved.
    pub fn new(policy: CloningPolicy) -> Self {
        Self(Cell::new(policy))
    }

    /// The stored policy; may still be `AutoDetect`.
    pub fn get(&self) -> CloningPolicy {
        self.0.get()
    }

    /// Replace the stored policy. `AutoDetect` will be probed again on
    /// the next [`resolve`](PolicyCell::resolve).
    pub fn set(&mut self, policy: CloningPolicy) {
        self.0.set(policy);
    }

    /// Resolve and cache. `probe` runs at most once per `AutoDetect`.
    pub fn resolve(&self, probe: impl FnOnce() -> bool) -> CloningPolicy {
        let policy = self.0.get();
        if policy.is_resolved() {
            return policy;
        }
        let resolved = policy.resolve(probe);
        self.0.set(resolved);
        resolved
    }
}

impl Clone for PolicyCell {
    fn clone(&self) -> Self {
        Self(Cell::new(self.0.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_runs_once() {
        let cell = PolicyCell::new(CloningPolicy::AutoDetect);
        let mut calls = 0;
        assert_eq!(
            cell.resolve(|| {
                calls += 1;
                true
            }),
            CloningPolicy::TryDeepClone
        );
        assert_eq!(
            cell.resolve(|| {
                calls += 1;
                false
            }),
            CloningPolicy::TryDeepClone
        );
        assert_eq!(calls, 1);
        assert_eq!(cell.get(), CloningPolicy::TryDeepClone);
    }

    #[test]
    fn set_reenables_detection() {
        let mut cell = PolicyCell::new(CloningPolicy::AutoDetect);
        cell.resolve(|| false);
        cell.set(CloningPolicy::AutoDetect);
        assert_eq!(cell.resolve(|| true), CloningPolicy::TryDeepClone);
    }
}
