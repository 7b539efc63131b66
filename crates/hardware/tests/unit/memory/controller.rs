//! Memory Controller Tests.
//!
//! Verifies the fixed-latency controller and that the backing store, alone or
//! under a full hierarchy, charges whatever its controller reports.

use crate::common::mocks::controller::MockController;
use memsim_core::cache::NextLevel;
use memsim_core::common::AccessType;
use memsim_core::config::Config;
use memsim_core::memory::BackingStore;
use memsim_core::memory::controller::{MemoryController, SimpleController};
use memsim_core::sim::{Clock, Hierarchy};
use mockall::predicate::eq;

#[test]
fn simple_controller_returns_fixed_latencies() {
    let mut controller = SimpleController::new(100, 50);
    assert_eq!(controller.access_latency(0, AccessType::Read), 100);
    assert_eq!(controller.access_latency(0x4000, AccessType::Read), 100);
    assert_eq!(controller.access_latency(64, AccessType::Write), 50);
}

#[test]
fn store_asks_controller_for_each_transfer() {
    let mut mock = MockController::new();
    let _ = mock
        .expect_access_latency()
        .with(eq(64), eq(AccessType::Read))
        .times(1)
        .return_const(7u64);
    let _ = mock
        .expect_access_latency()
        .with(eq(128), eq(AccessType::Write))
        .times(1)
        .return_const(3u64);

    let mut store = BackingStore::with_controller(256, 64, Box::new(mock));
    let mut clock = Clock::new();
    let mut block = [0; 64];

    store.access(64, &mut block, AccessType::Read, &mut clock).unwrap();
    store.access(128, &mut block, AccessType::Write, &mut clock).unwrap();

    assert_eq!(clock.now(), 10);
}

#[test]
fn rejected_transfer_never_reaches_controller() {
    let mut mock = MockController::new();
    let _ = mock.expect_access_latency().times(0);

    let mut store = BackingStore::with_controller(128, 64, Box::new(mock));
    let mut clock = Clock::new();
    let mut block = [0; 64];

    assert!(store.access(32, &mut block, AccessType::Read, &mut clock).is_err());
    assert!(store.access(128, &mut block, AccessType::Read, &mut clock).is_err());
}

#[test]
fn hierarchy_uses_injected_controller() {
    // Single 64-byte line: a cold read is one block fetch plus one level hit.
    let mut mock = MockController::new();
    let _ = mock
        .expect_access_latency()
        .with(eq(0), eq(AccessType::Read))
        .times(1)
        .return_const(7u64);

    let mut sim = Hierarchy::with_memory_controller(&Config::single_line(), Box::new(mock)).unwrap();
    assert_eq!(sim.read_word(0).unwrap(), 0);
    assert_eq!(sim.time(), 7 + 1);

    assert_eq!(sim.read_word(4).unwrap(), 0);
    assert_eq!(sim.time(), 9, "hit does not reach the controller");
}

#[test]
fn controller_sees_write_backs() {
    let mut mock = MockController::new();
    let _ = mock
        .expect_access_latency()
        .with(mockall::predicate::always(), eq(AccessType::Read))
        .times(2)
        .return_const(0u64);
    let _ = mock
        .expect_access_latency()
        .with(eq(0), eq(AccessType::Write))
        .times(1)
        .return_const(1000u64);

    let mut sim = Hierarchy::with_memory_controller(&Config::single_line(), Box::new(mock)).unwrap();
    sim.write_word(0, 1).unwrap();
    sim.write_word(64, 2).unwrap();

    assert_eq!(sim.time(), 1 + 1000 + 1);
    assert_eq!(sim.memory().peek_word(0).unwrap(), 1);
}
