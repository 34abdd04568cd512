//! Errors from the simulation driver.

use std::error::Error;
use std::fmt;

use tessel_core::RuleError;
use tessel_field::FieldError;
use tessel_ring::RingError;

use crate::config::ConfigError;

/// Errors from [`Simulation`](crate::Simulation) operations.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// The ring is full, may not grow, and the policy is
    /// [`MemFullPolicy::Fail`](crate::MemFullPolicy::Fail).
    MemoryFull {
        /// Ring capacity at the time of the request.
        capacity: usize,
    },
    /// The rule failed while computing a generation. The claimed slot
    /// was released; the newest generation is unchanged.
    RuleFailed {
        /// Name of the failing rule.
        name: String,
        /// The underlying rule error.
        reason: RuleError,
    },
    /// A rule parameter change was rejected.
    InvalidParam(RuleError),
    /// The configuration failed validation.
    Config(ConfigError),
    /// A ring operation failed.
    Ring(RingError),
    /// A checked cell access failed.
    Field(FieldError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemoryFull { capacity } => {
                write!(f, "generation memory full ({capacity} slots)")
            }
            Self::RuleFailed { name, reason } => write!(f, "rule '{name}' failed: {reason}"),
            Self::InvalidParam(e) => write!(f, "invalid rule parameter: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Ring(e) => write!(f, "ring error: {e}"),
            Self::Field(e) => write!(f, "field error: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RuleFailed { reason, .. } => Some(reason),
            Self::InvalidParam(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Ring(e) => Some(e),
            Self::Field(e) => Some(e),
            Self::MemoryFull { .. } => None,
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RingError> for SimError {
    fn from(e: RingError) -> Self {
        Self::Ring(e)
    }
}

impl From<FieldError> for SimError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}
