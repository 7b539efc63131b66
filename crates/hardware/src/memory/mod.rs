//! Backing Store (DRAM).
//!
//! This module implements the ground-truth memory beneath every cache level. It provides:
//! 1. **Storage:** A flat, zero-initialized byte array sized from configuration.
//! 2. **Block Transfers:** Block-aligned reads and writes requested by the lowest cache level.
//! 3. **Controller:** Latency modeling through a [`MemoryController`].
//!
//! Loading and peeking bypass timing and statistics; they exist for setup and inspection.

/// Memory controller implementations for access latency modeling.
pub mod controller;

use std::fmt;

use tracing::trace;

use self::controller::{MemoryController, SimpleController};
use crate::cache::NextLevel;
use crate::common::data::AccessType;
use crate::common::error::AccessError;
use crate::config::MemoryConfig;
use crate::sim::clock::Clock;
use crate::stats::MemoryStats;

/// Byte-addressable main memory serving whole blocks.
pub struct BackingStore {
    data: Vec<u8>,
    block_bytes: usize,
    controller: Box<dyn MemoryController>,
    stats: MemoryStats,
}

impl BackingStore {
    /// Creates a zeroed store with a fixed-latency controller.
    ///
    /// # Arguments
    ///
    /// * `config` - Size and latencies.
    /// * `block_bytes` - Transfer granularity and alignment.
    pub fn new(config: &MemoryConfig, block_bytes: usize) -> Self {
        Self::with_controller(
            config.size_bytes,
            block_bytes,
            Box::new(SimpleController::new(
                config.read_latency,
                config.write_latency,
            )),
        )
    }

    /// Creates a zeroed store that asks `controller` for every transfer latency.
    pub fn with_controller(
        size_bytes: usize,
        block_bytes: usize,
        controller: Box<dyn MemoryController>,
    ) -> Self {
        Self {
            data: vec![0; size_bytes],
            block_bytes,
            controller,
            stats: MemoryStats::default(),
        }
    }

    /// Total size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the store holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Transfer counters accumulated since construction or the last reset.
    pub const fn stats(&self) -> &MemoryStats {
        &self.stats
    }

    /// Clears the transfer counters.
    pub fn reset_stats(&mut self) {
        self.stats = MemoryStats::default();
    }

    /// Returns the byte range `[addr, addr + len)` if it lies inside the store.
    fn range(&self, addr: u64, len: usize) -> Result<std::ops::Range<usize>, AccessError> {
        let out_of_bounds = AccessError::OutOfBounds {
            addr,
            len,
            size: self.data.len(),
        };
        let start = usize::try_from(addr).map_err(|_| out_of_bounds.clone())?;
        match start.checked_add(len) {
            Some(end) if end <= self.data.len() => Ok(start..end),
            _ => Err(out_of_bounds),
        }
    }

    /// Copies `bytes` into memory at `addr` without advancing time.
    ///
    /// Used to seed memory contents before a run.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::OutOfBounds`] if the bytes do not fit.
    pub fn load(&mut self, addr: u64, bytes: &[u8]) -> Result<(), AccessError> {
        let range = self.range(addr, bytes.len())?;
        self.data[range].copy_from_slice(bytes);
        Ok(())
    }

    /// Copies memory at `addr` into `buf` without advancing time.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::OutOfBounds`] if the range does not fit.
    pub fn peek(&self, addr: u64, buf: &mut [u8]) -> Result<(), AccessError> {
        let range = self.range(addr, buf.len())?;
        buf.copy_from_slice(&self.data[range]);
        Ok(())
    }

    /// Reads a little-endian word without advancing time.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::OutOfBounds`] if the word does not fit.
    pub fn peek_word(&self, addr: u64) -> Result<u32, AccessError> {
        let mut word = [0; 4];
        self.peek(addr, &mut word)?;
        Ok(u32::from_le_bytes(word))
    }
}

impl NextLevel for BackingStore {
    /// Transfers one block between `buf` and memory.
    ///
    /// `addr` must be block-aligned. Nothing is copied and no time passes if the
    /// request is rejected.
    fn access(
        &mut self,
        addr: u64,
        buf: &mut [u8],
        access: AccessType,
        clock: &mut Clock,
    ) -> Result<(), AccessError> {
        if addr % self.block_bytes as u64 != 0 {
            return Err(AccessError::Misaligned {
                addr,
                align: self.block_bytes,
            });
        }
        let range = self.range(addr, buf.len())?;
        match access {
            AccessType::Read => {
                buf.copy_from_slice(&self.data[range]);
                self.stats.reads += 1;
            }
            AccessType::Write => {
                self.data[range].copy_from_slice(buf);
                self.stats.writes += 1;
            }
        }
        let latency = self.controller.access_latency(addr, access);
        clock.advance(latency);
        trace!(addr, ?access, latency, "memory transfer");
        Ok(())
    }
}

impl fmt::Debug for BackingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackingStore")
            .field("size", &self.data.len())
            .field("block_bytes", &self.block_bytes)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
