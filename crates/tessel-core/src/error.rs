//! Error type returned by rule kernels.

use std::error::Error;
use std::fmt;

/// Errors from rule-kernel execution or parameter handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The kernel could not compute the next generation.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// No parameter with this name exists on the rule.
    UnknownParam {
        /// The requested parameter name.
        name: String,
    },
    /// A parameter value fell outside its declared range.
    ParamOutOfRange {
        /// Parameter name.
        name: String,
        /// The rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
            Self::UnknownParam { name } => write!(f, "unknown parameter '{name}'"),
            Self::ParamOutOfRange {
                name,
                value,
                min,
                max,
            } => write!(
                f,
                "parameter '{name}' value {value} outside [{min}, {max}]"
            ),
        }
    }
}

impl Error for RuleError {}
