//! Element copy policy for field clones and bulk fills.

/// Decides whether element copies go through [`DeepClone::deep_clone`]
/// or plain [`Clone::clone`].
///
/// `AutoDetect` is a request, not a state: fields resolve it once (see
/// [`CloningPolicy::resolve`]) by probing their elements and store the
/// outcome, so later clones never rescan.
///
/// [`DeepClone::deep_clone`]: crate::DeepClone::deep_clone
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CloningPolicy {
    /// Deep-copy every element that supports it.
    TryDeepClone,
    /// Always copy shallowly.
    #[default]
    DoNotTryDeepClone,
    /// Whatever the value type's own `Clone` does. Behaves shallowly.
    UseDefault,
    /// Probe the stored elements once and settle on one of the two
    /// concrete policies above.
    AutoDetect,
}

impl CloningPolicy {
    /// True if element copies should use the deep-clone capability.
    pub const fn is_deep(self) -> bool {
        matches!(self, CloningPolicy::TryDeepClone)
    }

    /// True for every variant except `AutoDetect`.
    pub const fn is_resolved(self) -> bool {
        !matches!(self, CloningPolicy::AutoDetect)
    }

    /// Settle `AutoDetect` into a storable policy.
    ///
    /// `probe` is only invoked for `AutoDetect`; it should report whether
    /// any stored element supports deep cloning.
    pub fn resolve(self, probe: impl FnOnce() -> bool) -> CloningPolicy {
        match self {
            CloningPolicy::AutoDetect => {
                if probe() {
                    CloningPolicy::TryDeepClone
                } else {
                    CloningPolicy::DoNotTryDeepClone
                }
            }
            other => other,
        }
    }
}
