//! Cumulative counters for the simulation driver.

/// Counters updated by [`Simulation`](crate::Simulation), read through
/// [`Simulation::metrics()`](crate::Simulation::metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimMetrics {
    /// Generations successfully computed.
    pub generations_computed: u64,
    /// Oldest generations dropped under `ForgetSilently`.
    pub evictions: u64,
    /// Times the ring grew.
    pub growth_events: u64,
    /// Requests refused under `StopSilently`.
    pub refused_generations: u64,
    /// Ring rebuilds caused by `reconfigure`.
    pub resize_events: u64,
    /// Rule executions that returned an error.
    pub rule_failures: u64,
    /// `go_to_gen` runs stopped by an interrupt.
    pub interrupted_runs: u64,
    /// Wall-clock time of the last successful step, in microseconds.
    pub last_step_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SimMetrics::default();
        assert_eq!(m.generations_computed, 0);
        assert_eq!(m.evictions, 0);
        assert_eq!(m.last_step_us, 0);
    }
}
