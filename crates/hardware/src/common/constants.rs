//! Global Hierarchy Constants.
//!
//! This module defines the fixed geometry and timing of the reference
//! two-level hierarchy. It includes:
//! 1. **Sizes:** Word, block, L1, L2, and DRAM capacities in bytes.
//! 2. **Timing:** Per-level read and write latencies in simulated time units.
//!
//! Sizes are expressed in bytes and derived from `BLOCK_SIZE` so they stay
//! consistent with one another.

/// Size of a word in bytes (32-bit words).
pub const WORD_SIZE: usize = 4;

/// Size of a cache block in bytes (16 words).
pub const BLOCK_SIZE: usize = 16 * WORD_SIZE;

/// Size of main memory in bytes (1024 blocks).
pub const DRAM_SIZE: usize = 1024 * BLOCK_SIZE;

/// Size of the first-level cache in bytes (256 blocks).
pub const L1_SIZE: usize = 256 * BLOCK_SIZE;

/// Size of the second-level cache in bytes (512 blocks).
pub const L2_SIZE: usize = 512 * BLOCK_SIZE;

/// Associativity of the second-level cache.
pub const L2_WAYS: usize = 2;

/// DRAM block read latency.
pub const DRAM_READ_TIME: u64 = 100;

/// DRAM block write latency.
pub const DRAM_WRITE_TIME: u64 = 50;

/// L2 read latency.
pub const L2_READ_TIME: u64 = 10;

/// L2 write latency.
pub const L2_WRITE_TIME: u64 = 5;

/// L1 read latency.
pub const L1_READ_TIME: u64 = 1;

/// L1 write latency.
pub const L1_WRITE_TIME: u64 = 1;
