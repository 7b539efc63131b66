//! Randomized Hierarchy Properties.
//!
//! Drives random word traffic through small and reference hierarchies and
//! compares against a flat shadow memory:
//! 1. Every read returns the last value written to that address.
//! 2. After a flush, the backing store equals the shadow.
//! 3. Time never goes backwards, and every access costs at least the L1 latency.

use std::collections::HashMap;

use crate::common::harness::{build, tiny_config};
use memsim_core::config::{Config, ReplacementPolicy};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Read(u64),
    Write(u64, u32),
}

fn op(words: u64) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..words).prop_map(|w| Op::Read(w * 4)),
        (0..words, any::<u32>()).prop_map(|(w, v)| Op::Write(w * 4, v)),
    ]
}

fn policy() -> impl Strategy<Value = ReplacementPolicy> {
    prop_oneof![
        Just(ReplacementPolicy::Lru),
        Just(ReplacementPolicy::Fifo),
        Just(ReplacementPolicy::Mru),
        Just(ReplacementPolicy::Random),
    ]
}

/// Replays `ops`, checking reads and timing against the shadow as it goes.
fn replay(config: &Config, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut sim = build(config);
    let mut shadow: HashMap<u64, u32> = HashMap::new();
    let l1_min = config.levels[0].read_latency.min(config.levels[0].write_latency);

    for op in ops {
        let before = sim.time();
        match *op {
            Op::Read(addr) => {
                let value = sim.read_word(addr).map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert_eq!(value, shadow.get(&addr).copied().unwrap_or(0), "addr {:#x}", addr);
            }
            Op::Write(addr, value) => {
                sim.write_word(addr, value).map_err(|e| TestCaseError::fail(e.to_string()))?;
                let _ = shadow.insert(addr, value);
            }
        }
        prop_assert!(sim.time() >= before + l1_min);
    }

    let before = sim.time();
    sim.flush().map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert!(sim.time() >= before);

    for (&addr, &value) in &shadow {
        prop_assert_eq!(sim.memory().peek_word(addr).unwrap(), value, "addr {:#x}", addr);
    }
    for level in sim.levels() {
        for index in 0..level.geometry().num_sets() {
            let set = level.set(index).unwrap();
            prop_assert!(set.iter().all(|line| !line.dirty));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tiny_hierarchy_matches_flat_memory(
        policy in policy(),
        ops in prop::collection::vec(op(256), 1..400),
    ) {
        replay(&tiny_config(policy), &ops)?;
    }

    #[test]
    fn reference_hierarchy_matches_flat_memory(
        ops in prop::collection::vec(op(65536 / 4), 1..200),
    ) {
        replay(&Config::default(), &ops)?;
    }

    #[test]
    fn conflict_heavy_traffic_matches_flat_memory(
        // Four aliasing blocks per L1 line keep both levels evicting.
        ops in prop::collection::vec(
            (0u64..4, 0u64..4, any::<bool>(), any::<u32>()).prop_map(|(alias, word, write, v)| {
                let addr = alias * 16384 + word * 4;
                if write { Op::Write(addr, v) } else { Op::Read(addr) }
            }),
            1..300,
        ),
    ) {
        replay(&Config::default(), &ops)?;
    }

    #[test]
    fn single_line_matches_flat_memory(ops in prop::collection::vec(op(64), 1..200)) {
        replay(&Config::single_line(), &ops)?;
    }
}
