//! # Address Arithmetic Tests
//!
//! Verifies the tag/index/offset split used by each cache level and that
//! `compose` is its exact inverse for every geometry in use.

use memsim_core::common::addr::{AddrParts, Geometry};
use memsim_core::common::constants::{BLOCK_SIZE, L1_SIZE, L2_SIZE, L2_WAYS};
use proptest::prelude::*;
use rstest::rstest;

fn l1() -> Geometry {
    Geometry::new(BLOCK_SIZE, L1_SIZE / BLOCK_SIZE)
}

fn l2() -> Geometry {
    Geometry::new(BLOCK_SIZE, L2_SIZE / (BLOCK_SIZE * L2_WAYS))
}

#[test]
fn reference_geometries() {
    assert_eq!(l1().num_sets(), 256);
    assert_eq!(l1().span(), 16384);
    assert_eq!(l2().num_sets(), 256);
    assert_eq!(l2().span(), 16384);
}

#[rstest]
#[case(0, 0, 0, 0)]
#[case(4, 0, 0, 4)]
#[case(63, 0, 0, 63)]
#[case(64, 0, 1, 0)]
#[case(0x1234, 0, 72, 52)]
#[case(16384, 1, 0, 0)]
#[case(50000, 3, 13, 16)]
#[case(65532, 3, 255, 60)]
fn l1_decomposition(
    #[case] addr: u64,
    #[case] tag: u64,
    #[case] index: usize,
    #[case] offset: usize,
) {
    assert_eq!(l1().decompose(addr), AddrParts { tag, index, offset });
}

/// A direct-mapped level over a larger cache: 512 sets, span 32 KiB.
#[rstest]
#[case(16384, 0, 256, 0)]
#[case(32768, 1, 0, 0)]
#[case(32768 + 68, 1, 1, 4)]
fn wide_direct_mapped_decomposition(
    #[case] addr: u64,
    #[case] tag: u64,
    #[case] index: usize,
    #[case] offset: usize,
) {
    let geometry = Geometry::new(BLOCK_SIZE, 512);
    assert_eq!(geometry.span(), 32768);
    assert_eq!(geometry.decompose(addr), AddrParts { tag, index, offset });
}

#[test]
fn aliasing_addresses_share_an_index() {
    let a = l1().decompose(0x40);
    let b = l1().decompose(0x40 + 16384);
    assert_eq!(a.index, b.index);
    assert_ne!(a.tag, b.tag);
}

#[test]
fn single_line_geometry_puts_everything_in_set_zero() {
    let geometry = Geometry::new(BLOCK_SIZE, 1);
    let parts = geometry.decompose(0x1234);
    assert_eq!(parts.index, 0);
    assert_eq!(parts.tag, 0x1234 / 64);
    assert_eq!(geometry.compose(parts), 0x1234);
}

proptest! {
    #[test]
    fn compose_inverts_decompose(
        addr in 0u64..(1 << 40),
        block_words in 1usize..=32,
        num_sets in 1usize..=1024,
    ) {
        let geometry = Geometry::new(block_words * 4, num_sets);
        let parts = geometry.decompose(addr);
        prop_assert!(parts.index < num_sets);
        prop_assert!(parts.offset < geometry.block_bytes());
        prop_assert_eq!(
            parts.tag * geometry.span() + (parts.index * geometry.block_bytes()) as u64 + parts.offset as u64,
            addr
        );
        prop_assert_eq!(geometry.compose(parts), addr);
    }

    #[test]
    fn reference_levels_are_invertible(addr in 0u64..65536) {
        for geometry in [l1(), l2()] {
            prop_assert_eq!(geometry.compose(geometry.decompose(addr)), addr);
        }
    }
}
