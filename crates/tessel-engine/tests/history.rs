//! Generation-window behaviour of the driver across storage backends.

use proptest::prelude::*;
use tessel_engine::{MemFullPolicy, NeverInterrupt, SimConfig, SimError, Simulation};
use tessel_field::{CellField, GenericField, Storage};
use tessel_test_utils::{FailingRule, StampRule};

fn config(mem_slots: usize, max: usize, growth_factor: f64) -> SimConfig {
    SimConfig {
        width: 2,
        height: 2,
        mem_slots,
        growth_factor,
        max_mem_slots: Some(max),
        ..SimConfig::default()
    }
}

fn sim(storage: Storage, cfg: SimConfig) -> Simulation<GenericField<u32>, StampRule> {
    let template = GenericField::new(storage, 2, 2).unwrap();
    Simulation::new(cfg, template, StampRule).unwrap()
}

fn retained(s: &Simulation<GenericField<u32>, StampRule>) -> Vec<u32> {
    s.ring().iter().map(|f| f.get(1, 1)).collect()
}

#[test]
fn full_ring_forgets_oldest() {
    for storage in [Storage::Dense, Storage::Mesh] {
        let mut s = sim(storage, config(3, 3, 1.0));
        for _ in 0..4 {
            assert!(s.calculate_next_gen().unwrap());
        }
        assert_eq!(s.num_gens(), 3);
        assert_eq!(s.oldest_gen(), 2);
        assert_eq!(s.current_gen(), 4);
        assert!(s.generation(0).is_none());
        assert_eq!(retained(&s), vec![2, 3, 4]);
    }
}

#[test]
fn ring_grows_up_to_max() {
    let mut s = sim(Storage::Dense, config(4, 8, 2.0));
    for _ in 0..4 {
        s.calculate_next_gen().unwrap();
    }
    assert_eq!(s.capacity(), 8);
    assert_eq!(retained(&s), vec![0, 1, 2, 3, 4]);

    s.go_to_gen(12, &NeverInterrupt).unwrap();
    assert_eq!(s.capacity(), 8);
    assert_eq!(s.metrics().growth_events, 1);
    assert_eq!(retained(&s), (5..=12).collect::<Vec<_>>());
}

#[test]
fn fail_policy_stops_fast_forward() {
    let mut cfg = config(3, 3, 1.0);
    cfg.mem_full = MemFullPolicy::Fail;
    let mut s = sim(Storage::Mesh, cfg);
    match s.go_to_gen(5, &NeverInterrupt) {
        Err(SimError::MemoryFull { capacity: 3 }) => {}
        other => panic!("expected MemoryFull, got {other:?}"),
    }
    assert_eq!(s.current_gen(), 2);
}

#[test]
fn stop_policy_reports_refusal() {
    let mut cfg = config(3, 3, 1.0);
    cfg.mem_full = MemFullPolicy::StopSilently;
    let mut s = sim(Storage::Dense, cfg);
    assert!(!s.go_to_gen(5, &NeverInterrupt).unwrap());
    assert_eq!(s.current_gen(), 2);
    assert_eq!(retained(&s), vec![0, 1, 2]);
}

#[test]
fn failed_rule_leaves_no_trace_after_eviction() {
    let template = GenericField::<u32>::new(Storage::Dense, 2, 2).unwrap();
    let mut s = Simulation::new(config(3, 3, 1.0), template, FailingRule::at(3)).unwrap();
    s.calculate_next_gen().unwrap();
    s.calculate_next_gen().unwrap();
    assert!(s.calculate_next_gen().is_err());
    // Generation 0 was evicted to make room; the failed slot is released.
    assert_eq!(s.num_gens(), 2);
    assert_eq!(s.oldest_gen(), 1);
    assert_eq!(s.current_gen(), 2);
    assert_eq!(s.cell(0, 0), Ok(2));
}

#[derive(Clone, Debug)]
enum Op {
    Step,
    Back,
    GoTo(u64),
    Oldest,
    Rebaseline,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Step),
        2 => Just(Op::Back),
        2 => (0u64..20).prop_map(Op::GoTo),
        1 => Just(Op::Oldest),
        1 => Just(Op::Rebaseline),
    ]
}

proptest! {
    #[test]
    fn window_stays_consistent(ops in prop::collection::vec(op(), 1..60)) {
        let mut s = sim(Storage::Dense, config(2, 6, 1.5));
        for op in ops {
            match op {
                Op::Step => { s.calculate_next_gen().unwrap(); }
                Op::Back => { s.go_back_one_gen(); }
                Op::GoTo(g) => { s.go_to_gen(g, &NeverInterrupt).unwrap(); }
                Op::Oldest => s.go_to_oldest_gen(),
                Op::Rebaseline => s.rebaseline(),
            }
            prop_assert!(s.num_gens() >= 1);
            prop_assert!(s.num_gens() <= s.capacity());
            prop_assert!(s.capacity() <= 6);
            prop_assert_eq!(s.oldest_gen() + s.num_gens() as u64 - 1, s.current_gen());
            prop_assert!(s.generation(s.oldest_gen()).is_some());
            prop_assert!(s.generation(s.current_gen() + 1).is_none());
        }
    }
}
