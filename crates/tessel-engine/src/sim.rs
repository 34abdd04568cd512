//! The generation-managing simulation driver.
//!
//! [`Simulation`] keeps a window `[oldest_gen, current_gen]` of generations
//! in a [`FieldRing`]. Generation ids are relative: rewinding to the
//! oldest generation or rebaselining relabels the survivor as 0.
//!
//! # Invariants
//!
//! - At least one generation is retained at all times.
//! - `oldest_gen() == current_gen() + 1 - num_gens()`.
//! - A failed or interrupted operation leaves the ring consistent as of
//!   the last completed generation.

use std::time::Instant;

use tracing::{debug, info, trace, warn};

use tessel_field::CellField;
use tessel_ring::{FieldRing, RingEnd, RingError};
use tessel_rule::{Rule, RuleContext, RuleParam};

use crate::config::{MemFullPolicy, SimConfig};
use crate::error::SimError;
use crate::interrupt::Interrupt;
use crate::metrics::SimMetrics;

/// A cellular-automaton run: generation history plus the rule that
/// extends it.
///
/// # Example
///
/// ```
/// use tessel_engine::{SimConfig, Simulation};
/// use tessel_field::{BinaryField, BinaryStorage, CellField};
/// use tessel_rule::{Rule, RuleContext, RuleError};
///
/// struct Flip;
/// impl Rule<BinaryField> for Flip {
///     fn name(&self) -> &str { "flip" }
///     fn step(&self, ctx: &mut RuleContext<'_, BinaryField>) -> Result<(), RuleError> {
///         ctx.map_cells(|prev, x, y| !prev.get(x, y));
///         Ok(())
///     }
/// }
///
/// let config = SimConfig { width: 4, height: 4, mem_slots: 8, ..SimConfig::default() };
/// let template = BinaryField::new(BinaryStorage::Packed, 4, 4).unwrap();
/// let mut sim = Simulation::new(config, template, Flip).unwrap();
/// assert!(sim.calculate_next_gen().unwrap());
/// assert_eq!(sim.current_gen(), 1);
/// assert_eq!(sim.cell(0, 0), Ok(true));
/// ```
#[derive(Debug)]
pub struct Simulation<F, R> {
    config: SimConfig,
    ring: FieldRing<F>,
    rule: R,
    current_gen: u64,
    metrics: SimMetrics,
}

impl<F: CellField, R: Rule<F>> Simulation<F, R> {
    /// Build a simulation.
    ///
    /// `template` fixes the storage backend and cloning policy of every
    /// generation and doubles as generation 0. It is resized to the
    /// configured grid size if it does not already match.
    pub fn new(config: SimConfig, template: F, rule: R) -> Result<Self, SimError> {
        config.validate()?;
        let template = if template.extent().width == config.width
            && template.extent().height == config.height
        {
            template
        } else {
            template.resized_clone(config.width, config.height)?
        };
        let mut ring = FieldRing::with_template(config.mem_slots, template)?;
        ring.add_last(false);
        info!(
            width = config.width,
            height = config.height,
            mem_slots = config.mem_slots,
            rule = rule.name(),
            "simulation created"
        );
        Ok(Self {
            config,
            ring,
            rule,
            current_gen: 0,
            metrics: SimMetrics::default(),
        })
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Compute the next generation.
    ///
    /// When the ring is full it first tries to grow; if growth is
    /// disallowed the configured [`MemFullPolicy`] decides. Returns
    /// `Ok(false)` if the policy refused the generation.
    ///
    /// # Errors
    ///
    /// [`SimError::MemoryFull`] under [`MemFullPolicy::Fail`];
    /// [`SimError::RuleFailed`] if the rule errors, in which case the
    /// newest generation is unchanged. An eviction already made to free
    /// the slot is not undone.
    pub fn calculate_next_gen(&mut self) -> Result<bool, SimError> {
        let started = Instant::now();
        if self.ring.is_full() && !self.try_grow()? {
            let capacity = self.ring.capacity();
            match self.config.mem_full {
                MemFullPolicy::ForgetSilently => {
                    self.metrics.evictions += 1;
                    trace!(capacity, "ring full, forgetting oldest generation");
                }
                MemFullPolicy::StopSilently => {
                    self.metrics.refused_generations += 1;
                    debug!(capacity, "ring full, generation refused");
                    return Ok(false);
                }
                MemFullPolicy::Fail => {
                    warn!(capacity, "ring full, cannot store another generation");
                    return Err(SimError::MemoryFull { capacity });
                }
            }
        }

        let generation = self.current_gen + 1;
        self.ring.add_last(false);
        let len = self.ring.len();
        let (previous, next) = self
            .ring
            .last_two_mut()
            .ok_or(RingError::IndexOutOfRange { index: 1, len })?;
        let mut ctx = RuleContext::new(previous, next, self.config.edge, generation);
        if let Err(reason) = self.rule.step(&mut ctx) {
            self.ring.remove_last();
            self.metrics.rule_failures += 1;
            warn!(generation, rule = self.rule.name(), %reason, "rule failed");
            return Err(SimError::RuleFailed {
                name: self.rule.name().to_string(),
                reason,
            });
        }

        self.current_gen = generation;
        self.metrics.generations_computed += 1;
        self.metrics.last_step_us = started.elapsed().as_micros() as u64;
        trace!(generation, "generation computed");
        Ok(true)
    }

    fn try_grow(&mut self) -> Result<bool, SimError> {
        let from = self.ring.capacity();
        let Some(to) = self.config.growth_target(from) else {
            return Ok(false);
        };
        self.ring.resize_capacity(to, self.config.resize)?;
        self.metrics.growth_events += 1;
        debug!(from, to, "generation ring grown");
        Ok(true)
    }

    /// Move to `target`, rewinding or stepping as needed.
    ///
    /// A target inside the retained window discards newer generations. A
    /// later target computes generations one at a time, polling
    /// `interrupt` before each. Returns `Ok(false)` if the target is
    /// older than the oldest retained generation, if the run was
    /// interrupted, or if the full-ring policy refused a generation.
    pub fn go_to_gen(&mut self, target: u64, interrupt: &dyn Interrupt) -> Result<bool, SimError> {
        if target < self.oldest_gen() {
            debug!(target, oldest = self.oldest_gen(), "target generation no longer retained");
            return Ok(false);
        }
        if target <= self.current_gen {
            let discard = (self.current_gen - target) as usize;
            if !self.ring.remove_last_n(discard) {
                return Ok(false);
            }
            self.current_gen = target;
            return Ok(true);
        }
        while self.current_gen < target {
            if interrupt.is_interrupted() {
                self.metrics.interrupted_runs += 1;
                info!(reached = self.current_gen, target, "fast-forward interrupted");
                return Ok(false);
            }
            if !self.calculate_next_gen()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // ── Rewinding ───────────────────────────────────────────────

    /// Discard the newest generation. `false` if only one remains.
    pub fn go_back_one_gen(&mut self) -> bool {
        if self.ring.len() <= 1 {
            return false;
        }
        self.ring.remove_last();
        self.current_gen -= 1;
        true
    }

    /// Keep only the oldest retained generation and relabel it 0.
    pub fn go_to_oldest_gen(&mut self) {
        self.ring.remove_all_except_first();
        self.current_gen = 0;
        debug!("rewound to oldest generation");
    }

    /// Keep only the newest generation and relabel it 0.
    pub fn rebaseline(&mut self) {
        let was = self.current_gen;
        self.ring.remove_all_except_last();
        self.current_gen = 0;
        info!(was, "current generation relabelled as 0");
    }

    /// Drop payloads held by slots outside the retained window.
    pub fn reclaim_memory(&mut self) -> usize {
        self.ring.reclaim_unused_slots()
    }

    // ── Settings ────────────────────────────────────────────────

    /// Apply new settings.
    ///
    /// A change of grid size or ring size rebuilds the ring via
    /// [`FieldRing::resize_to`], keeping generations from
    /// `config.resize.keep`. Dropping the newest generations moves
    /// `current_gen` back accordingly. On error nothing changes.
    pub fn reconfigure(&mut self, config: SimConfig) -> Result<(), SimError> {
        config.validate()?;
        let resized = config.width != self.config.width
            || config.height != self.config.height
            || config.mem_slots != self.config.mem_slots;
        if resized {
            let before = self.ring.len();
            self.ring
                .resize_to(config.mem_slots, config.width, config.height, config.resize)?;
            let dropped = before - self.ring.len();
            if config.resize.keep == RingEnd::Oldest {
                self.current_gen -= dropped as u64;
            }
            self.metrics.resize_events += 1;
            info!(
                width = config.width,
                height = config.height,
                mem_slots = config.mem_slots,
                dropped,
                "simulation resized"
            );
        }
        self.config = config;
        Ok(())
    }

    /// Change a rule parameter by name.
    pub fn set_rule_param(&mut self, name: &str, value: i64) -> Result<(), SimError> {
        self.rule
            .set_param(name, value)
            .map_err(SimError::InvalidParam)?;
        debug!(param = name, value, "rule parameter changed");
        Ok(())
    }

    /// The rule's parameters.
    pub fn rule_params(&self) -> &[RuleParam] {
        self.rule.params()
    }

    // ── Access ──────────────────────────────────────────────────

    /// Id of the newest generation.
    pub fn current_gen(&self) -> u64 {
        self.current_gen
    }

    /// Id of the oldest retained generation.
    pub fn oldest_gen(&self) -> u64 {
        self.current_gen + 1 - self.ring.len() as u64
    }

    /// Number of retained generations.
    pub fn num_gens(&self) -> usize {
        self.ring.len()
    }

    /// Current ring capacity (may exceed `config().mem_slots` after growth).
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// The newest generation.
    pub fn current(&self) -> Option<&F> {
        self.ring.last()
    }

    /// The newest generation, for seeding or editing.
    pub fn current_mut(&mut self) -> Option<&mut F> {
        self.ring.last_mut()
    }

    /// The generation before the newest.
    pub fn previous(&self) -> Option<&F> {
        self.ring.previous()
    }

    /// Generation `id`, if retained.
    pub fn generation(&self, id: u64) -> Option<&F> {
        if id > self.current_gen {
            return None;
        }
        let index = id.checked_sub(self.oldest_gen())?;
        self.ring.get(index as usize).ok()
    }

    /// Cell of the newest generation.
    pub fn cell(&self, x: u32, y: u32) -> Result<F::Value, SimError> {
        let len = self.ring.len();
        let current = self
            .current()
            .ok_or(RingError::IndexOutOfRange { index: 0, len })?;
        Ok(current.try_get(x, y)?)
    }

    /// Overwrite a cell of the newest generation.
    pub fn set_cell(&mut self, x: u32, y: u32, value: F::Value) -> Result<(), SimError> {
        let len = self.ring.len();
        let current = self
            .current_mut()
            .ok_or(RingError::IndexOutOfRange { index: 0, len })?;
        Ok(current.try_set(x, y, value)?)
    }

    /// Active settings.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Cumulative counters.
    pub fn metrics(&self) -> &SimMetrics {
        &self.metrics
    }

    /// The generation history.
    pub fn ring(&self) -> &FieldRing<F> {
        &self.ring
    }
}
