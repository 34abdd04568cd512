//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for constructing a [`Simulation`] and for
//! [`reconfigure()`](crate::Simulation::reconfigure).
//! [`validate()`](SimConfig::validate) checks structural invariants
//! before anything is allocated.
//!
//! [`Simulation`]: crate::Simulation

use std::error::Error;
use std::fmt;

use tessel_field::EdgeBehavior;
use tessel_ring::{ResizeOptions, MIN_CAPACITY};

// ── MemFullPolicy ─────────────────────────────────────────────────

/// What happens when a new generation is requested, the ring is full,
/// and it may not grow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemFullPolicy {
    /// Drop the oldest generation and proceed.
    #[default]
    ForgetSilently,
    /// Produce no generation; `calculate_next_gen` returns `Ok(false)`.
    StopSilently,
    /// Fail with [`SimError::MemoryFull`](crate::SimError::MemoryFull).
    Fail,
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid width or height is zero.
    InvalidDimensions {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// Ring size is below the minimum of 2.
    RingTooSmall {
        /// The configured size that was too small.
        configured: usize,
    },
    /// Growth factor is NaN, infinite, zero, or negative.
    InvalidGrowthFactor {
        /// The invalid value.
        value: f64,
    },
    /// The growth cap is below the initial ring size.
    MaxBelowInitial {
        /// Configured cap.
        max: usize,
        /// Configured initial size.
        initial: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be >= 1, got {width}x{height}")
            }
            Self::RingTooSmall { configured } => {
                write!(f, "mem_slots must be >= {MIN_CAPACITY}, got {configured}")
            }
            Self::InvalidGrowthFactor { value } => {
                write!(f, "growth_factor must be finite and > 0, got {value}")
            }
            Self::MaxBelowInitial { max, initial } => {
                write!(f, "max_mem_slots {max} is below mem_slots {initial}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ─────────────────────────────────────────────────────

/// Settings for a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid columns. Default: 32.
    pub width: u32,
    /// Grid rows. Default: 32.
    pub height: u32,
    /// Initial ring capacity, in generations. Default: 128.
    pub mem_slots: usize,
    /// Capacity multiplier applied when the ring is full. Values `<= 1`
    /// disable growth. Default: 1.0.
    pub growth_factor: f64,
    /// Capacity cap for growth; `None` = unbounded. Default: `Some(128)`.
    pub max_mem_slots: Option<usize>,
    /// Border handling handed to the rule. Default: wrap.
    pub edge: EdgeBehavior,
    /// Full-ring policy when growth is not possible.
    pub mem_full: MemFullPolicy,
    /// Which generations survive a shrinking reconfigure. Default: newest.
    pub resize: ResizeOptions,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            mem_slots: 128,
            growth_factor: 1.0,
            max_mem_slots: Some(128),
            edge: EdgeBehavior::Wrap,
            mem_full: MemFullPolicy::ForgetSilently,
            resize: ResizeOptions::default(),
        }
    }
}

impl SimConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Non-empty grid.
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        // 2. Ring large enough to hold previous + next.
        if self.mem_slots < MIN_CAPACITY {
            return Err(ConfigError::RingTooSmall {
                configured: self.mem_slots,
            });
        }
        // 3. Growth factor usable in arithmetic.
        if !self.growth_factor.is_finite() || self.growth_factor <= 0.0 {
            return Err(ConfigError::InvalidGrowthFactor {
                value: self.growth_factor,
            });
        }
        // 4. Cap not below the starting size.
        if let Some(max) = self.max_mem_slots {
            if max < self.mem_slots {
                return Err(ConfigError::MaxBelowInitial {
                    max,
                    initial: self.mem_slots,
                });
            }
        }
        Ok(())
    }

    /// The capacity a full ring of `capacity` slots should grow to, or
    /// `None` if growth is disallowed or would not add a slot.
    ///
    /// `floor(capacity * growth_factor)`, clamped to `max_mem_slots`.
    pub fn growth_target(&self, capacity: usize) -> Option<usize> {
        if self.growth_factor <= 1.0 {
            return None;
        }
        let max = self.max_mem_slots.unwrap_or(usize::MAX);
        if capacity >= max {
            return None;
        }
        let grown = (capacity as f64 * self.growth_factor).floor();
        let target = if grown >= max as f64 {
            max
        } else {
            grown as usize
        };
        (target > capacity).then_some(target)
    }
}
