//! Memory controller latency models.
//!
//! This module provides:
//! 1. **MemoryController:** The trait the backing store consults for the cost of each block transfer.
//! 2. **SimpleController:** Fixed read and write latency per access.
//!
//! Controllers are `Send + Sync` so a hierarchy can be moved across test threads.

use crate::common::data::AccessType;

/// Trait for memory controller implementations that report access latency.
pub trait MemoryController: Send + Sync {
    /// Returns the time required for a block transfer at the given address.
    ///
    /// # Arguments
    ///
    /// * `addr` - Block-aligned address being accessed.
    /// * `access` - Whether the block is read or written.
    ///
    /// # Returns
    ///
    /// Latency in simulated time units.
    fn access_latency(&mut self, addr: u64, access: AccessType) -> u64;
}

/// Fixed-latency memory controller; every read costs the same and every write costs the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimpleController {
    read_latency: u64,
    write_latency: u64,
}

impl SimpleController {
    /// Creates a simple controller with the given fixed latencies.
    ///
    /// # Arguments
    ///
    /// * `read_latency` - Time per block read.
    /// * `write_latency` - Time per block write.
    pub const fn new(read_latency: u64, write_latency: u64) -> Self {
        Self {
            read_latency,
            write_latency,
        }
    }
}

impl MemoryController for SimpleController {
    fn access_latency(&mut self, _addr: u64, access: AccessType) -> u64 {
        match access {
            AccessType::Read => self.read_latency,
            AccessType::Write => self.write_latency,
        }
    }
}
