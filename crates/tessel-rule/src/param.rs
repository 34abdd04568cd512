//! Bounded integer rule parameters.

use tessel_core::RuleError;

/// A named integer parameter constrained to `[min, max]`.
///
/// The range is checked on construction and on every [`set`](RuleParam::set),
/// so `min <= value() <= max` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleParam {
    name: String,
    info: String,
    min: i64,
    max: i64,
    value: i64,
}

impl RuleParam {
    /// Create a parameter. Fails if `value` is outside `[min, max]`.
    pub fn new(
        name: impl Into<String>,
        info: impl Into<String>,
        min: i64,
        max: i64,
        value: i64,
    ) -> Result<Self, RuleError> {
        let mut param = Self {
            name: name.into(),
            info: info.into(),
            min,
            max,
            value: min,
        };
        param.set(value)?;
        Ok(param)
    }

    /// Create a parameter, clamping `value` into `[min, max]`.
    ///
    /// Used for built-in defaults where the range is fixed at compile
    /// time. An inverted range pins the value to `min`.
    pub fn clamped(
        name: impl Into<String>,
        info: impl Into<String>,
        min: i64,
        max: i64,
        value: i64,
    ) -> Self {
        Self {
            name: name.into(),
            info: info.into(),
            min,
            max: max.max(min),
            value: value.min(max).max(min),
        }
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Change the value. Out-of-range values are rejected and the
    /// current value kept.
    pub fn set(&mut self, value: i64) -> Result<(), RuleError> {
        if value < self.min || value > self.max {
            return Err(RuleError::ParamOutOfRange {
                name: self.name.clone(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        self.value = value;
        Ok(())
    }
}

/// Set the parameter called `name` in `params`.
pub fn set_named(params: &mut [RuleParam], name: &str, value: i64) -> Result<(), RuleError> {
    params
        .iter_mut()
        .find(|p| p.name == name)
        .ok_or_else(|| RuleError::UnknownParam {
            name: name.to_string(),
        })?
        .set(value)
}

/// Current value of the parameter called `name`.
pub fn get_named(params: &[RuleParam], name: &str) -> Option<i64> {
    params.iter().find(|p| p.name == name).map(RuleParam::value)
}
