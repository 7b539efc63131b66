//! Hierarchy: owns every cache level, the backing store, and the clock.
//!
//! This is the access facade. Word reads and writes enter level 0 and cascade
//! through misses and write-backs to the backing store before returning. The
//! levels are borrowed as a chain (`Lower`) so each level can call the rest of
//! the hierarchy beneath it without shared mutable state.

use tracing::{debug, info};

use super::clock::Clock;
use crate::cache::{CacheLevel, NextLevel, Resident};
use crate::common::constants::WORD_SIZE;
use crate::common::data::AccessType;
use crate::common::error::{AccessError, ConfigError};
use crate::config::Config;
use crate::memory::BackingStore;
use crate::memory::controller::MemoryController;
use crate::stats::HierarchyStats;

/// The levels below some point in the hierarchy, ending at the backing store.
struct Lower<'a> {
    levels: &'a mut [CacheLevel],
    memory: &'a mut BackingStore,
}

impl NextLevel for Lower<'_> {
    fn access(
        &mut self,
        addr: u64,
        buf: &mut [u8],
        access: AccessType,
        clock: &mut Clock,
    ) -> Result<(), AccessError> {
        match self.levels.split_first_mut() {
            Some((level, rest)) => {
                let mut below = Lower {
                    levels: rest,
                    memory: &mut *self.memory,
                };
                level.access(addr, buf, access, clock, &mut below)
            }
            None => self.memory.access(addr, buf, access, clock),
        }
    }
}

/// A complete memory hierarchy simulator instance.
///
/// # Examples
///
/// ```
/// use memsim_core::{Config, Hierarchy};
///
/// let mut sim = Hierarchy::new(&Config::default()).unwrap();
/// sim.write_word(0, 0xAABB_CCDD).unwrap();
/// assert_eq!(sim.read_word(0).unwrap(), 0xAABB_CCDD);
/// ```
#[derive(Debug)]
pub struct Hierarchy {
    levels: Vec<CacheLevel>,
    memory: BackingStore,
    clock: Clock,
}

impl Hierarchy {
    /// Builds a hierarchy with a fixed-latency backing store.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let memory = BackingStore::new(&config.memory, config.block_bytes);
        Ok(Self::assemble(config, memory))
    }

    /// Builds a hierarchy whose backing store asks `controller` for latencies.
    ///
    /// The latencies in `config.memory` are ignored; its size is still used.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn with_memory_controller(
        config: &Config,
        controller: Box<dyn MemoryController>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let memory =
            BackingStore::with_controller(config.memory.size_bytes, config.block_bytes, controller);
        Ok(Self::assemble(config, memory))
    }

    fn assemble(config: &Config, memory: BackingStore) -> Self {
        let levels: Vec<CacheLevel> = config
            .levels
            .iter()
            .map(|level| CacheLevel::new(level, config.block_bytes))
            .collect();
        info!(
            levels = levels.len(),
            block_bytes = config.block_bytes,
            memory_bytes = config.memory.size_bytes,
            "hierarchy built"
        );
        Self {
            levels,
            memory,
            clock: Clock::new(),
        }
    }

    /// Invalidates every line of every level.
    ///
    /// Dirty data that was never flushed is lost. The clock, the backing store,
    /// and the statistics are untouched.
    pub fn init_cache(&mut self) {
        for level in &mut self.levels {
            level.invalidate_all();
        }
        info!("cache lines invalidated");
    }

    /// Sets simulated time back to zero.
    pub const fn reset_time(&mut self) {
        self.clock.reset();
    }

    /// Current simulated time.
    pub const fn time(&self) -> u64 {
        self.clock.now()
    }

    /// Rejects word requests that are misaligned or reach past the store.
    fn check_word(&self, addr: u64) -> Result<(), AccessError> {
        if addr % WORD_SIZE as u64 != 0 {
            return Err(AccessError::Misaligned {
                addr,
                align: WORD_SIZE,
            });
        }
        let fits = addr
            .checked_add(WORD_SIZE as u64)
            .is_some_and(|end| end <= self.memory.len() as u64);
        if !fits {
            return Err(AccessError::OutOfBounds {
                addr,
                len: WORD_SIZE,
                size: self.memory.len(),
            });
        }
        Ok(())
    }

    /// Runs one word access through level 0.
    ///
    /// The address is validated first, so a rejected request changes no state.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Misaligned`] or [`AccessError::OutOfBounds`].
    pub fn access(
        &mut self,
        addr: u64,
        buf: &mut [u8; WORD_SIZE],
        access: AccessType,
    ) -> Result<(), AccessError> {
        self.check_word(addr)?;
        let mut chain = Lower {
            levels: &mut self.levels,
            memory: &mut self.memory,
        };
        chain.access(addr, buf, access, &mut self.clock)
    }

    /// Reads the word at `addr` into `buf`.
    ///
    /// # Errors
    ///
    /// See [`Hierarchy::access`].
    pub fn read(&mut self, addr: u64, buf: &mut [u8; WORD_SIZE]) -> Result<(), AccessError> {
        self.access(addr, buf, AccessType::Read)
    }

    /// Writes `buf` to the word at `addr`.
    ///
    /// # Errors
    ///
    /// See [`Hierarchy::access`].
    pub fn write(&mut self, addr: u64, buf: &[u8; WORD_SIZE]) -> Result<(), AccessError> {
        let mut word = *buf;
        self.access(addr, &mut word, AccessType::Write)
    }

    /// Reads the little-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// See [`Hierarchy::access`].
    pub fn read_word(&mut self, addr: u64) -> Result<u32, AccessError> {
        let mut word = [0; WORD_SIZE];
        self.read(addr, &mut word)?;
        Ok(u32::from_le_bytes(word))
    }

    /// Writes `value` little-endian at `addr`.
    ///
    /// # Errors
    ///
    /// See [`Hierarchy::access`].
    pub fn write_word(&mut self, addr: u64, value: u32) -> Result<(), AccessError> {
        self.write(addr, &value.to_le_bytes())
    }

    /// Writes every dirty line down to the backing store.
    ///
    /// Levels are flushed from the top, so data pushed into a lower level by an
    /// upper flush is itself flushed afterwards. Every transfer is charged to
    /// the clock.
    ///
    /// # Errors
    ///
    /// Propagates any [`AccessError`] from a lower level.
    pub fn flush(&mut self) -> Result<(), AccessError> {
        for depth in 0..self.levels.len() {
            let (upper, rest) = self.levels.split_at_mut(depth + 1);
            let mut below = Lower {
                levels: rest,
                memory: &mut self.memory,
            };
            upper[depth].flush(&mut self.clock, &mut below)?;
        }
        debug!(time = self.clock.now(), "hierarchy flushed");
        Ok(())
    }

    /// Reports where `addr` is resident in `level`, without timing side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::LevelOutOfRange`] if `level` does not exist.
    pub fn probe(&self, level: usize, addr: u64) -> Result<Option<Resident>, AccessError> {
        self.levels
            .get(level)
            .map(|cache| cache.probe(addr))
            .ok_or(AccessError::LevelOutOfRange {
                level,
                levels: self.levels.len(),
            })
    }

    /// Cache levels, closest to the caller first.
    pub fn levels(&self) -> &[CacheLevel] {
        &self.levels
    }

    /// The backing store.
    pub const fn memory(&self) -> &BackingStore {
        &self.memory
    }

    /// The backing store, for loading contents before a run.
    pub const fn memory_mut(&mut self) -> &mut BackingStore {
        &mut self.memory
    }

    /// Snapshot of every counter and the current time.
    pub fn stats(&self) -> HierarchyStats {
        HierarchyStats {
            time: self.clock.now(),
            levels: self.levels.iter().map(|l| l.stats().clone()).collect(),
            memory: *self.memory.stats(),
        }
    }

    /// Clears every counter. Time is not affected.
    pub fn reset_stats(&mut self) {
        for level in &mut self.levels {
            level.reset_stats();
        }
        self.memory.reset_stats();
    }
}
