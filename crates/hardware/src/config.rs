//! Configuration system for the memory hierarchy simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline geometry and latency constants (the L1/2-way L2/DRAM reference).
//! 2. **Structures:** Hierarchy, per-level cache, and backing store configuration.
//! 3. **Enums:** Replacement policy types.
//! 4. **Presets:** The simpler single-line, L1-only, and direct-mapped two-level variants.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{
    BLOCK_SIZE, DRAM_READ_TIME, DRAM_SIZE, DRAM_WRITE_TIME, L1_READ_TIME, L1_SIZE, L1_WRITE_TIME,
    L2_READ_TIME, L2_SIZE, L2_WAYS, L2_WRITE_TIME, WORD_SIZE,
};
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden in JSON configuration.
mod defaults {
    use super::{
        BLOCK_SIZE, DRAM_READ_TIME, DRAM_SIZE, DRAM_WRITE_TIME, L1_READ_TIME, L1_SIZE,
        L1_WRITE_TIME,
    };

    /// Default block size in bytes (16 words).
    pub const BLOCK_BYTES: usize = BLOCK_SIZE;

    /// Default cache size in bytes (256 blocks).
    pub const CACHE_SIZE: usize = L1_SIZE;

    /// Default cache associativity (1 way = direct-mapped).
    pub const CACHE_WAYS: usize = 1;

    /// Default cache read latency.
    pub const CACHE_READ_LATENCY: u64 = L1_READ_TIME;

    /// Default cache write latency.
    pub const CACHE_WRITE_LATENCY: u64 = L1_WRITE_TIME;

    /// Default backing store size in bytes (1024 blocks).
    pub const MEMORY_SIZE: usize = DRAM_SIZE;

    /// Default backing store block read latency.
    pub const MEMORY_READ_LATENCY: u64 = DRAM_READ_TIME;

    /// Default backing store block write latency.
    pub const MEMORY_WRITE_LATENCY: u64 = DRAM_WRITE_TIME;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which cache line to evict
/// when a new line must be installed in a full cache set. Invalid ways are
/// always filled first regardless of the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used, by per-line access timestamp.
    ///
    /// Evicts the line with the smallest last-access time; ties go to the
    /// lowest way.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// First In First Out, by per-line fill timestamp.
    ///
    /// Evicts the line that was installed earliest.
    #[serde(alias = "Fifo")]
    Fifo,
    /// Most Recently Used, by per-line access timestamp.
    ///
    /// Evicts the line that was accessed most recently.
    /// Effective for cyclic access patterns larger than the cache.
    #[serde(alias = "Mru")]
    Mru,
    /// Pseudo-random replacement from a fixed-seed xorshift generator.
    #[serde(alias = "Random")]
    Random,
}

/// Root configuration structure describing a complete hierarchy.
///
/// Levels are ordered from the one closest to the caller (index 0) to the one
/// closest to the backing store.
///
/// # Examples
///
/// ```
/// use memsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.levels.len(), 2);
/// assert_eq!(config.levels[1].ways, 2);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use memsim_core::config::{Config, ReplacementPolicy};
///
/// let json = r#"{
///     "block_bytes": 32,
///     "levels": [
///         { "name": "L1", "size_bytes": 1024, "ways": 1, "read_latency": 1, "write_latency": 1 },
///         { "name": "L2", "size_bytes": 4096, "ways": 4, "read_latency": 8, "write_latency": 4, "policy": "Fifo" }
///     ],
///     "memory": { "size_bytes": 65536, "read_latency": 60, "write_latency": 30 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.block_bytes, 32);
/// assert_eq!(config.levels[1].policy, ReplacementPolicy::Fifo);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Block size in bytes, shared by every level.
    #[serde(default = "Config::default_block_bytes")]
    pub block_bytes: usize,
    /// Cache levels, closest to the caller first.
    pub levels: Vec<CacheConfig>,
    /// Backing store configuration.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Returns the default block size in bytes.
    fn default_block_bytes() -> usize {
        defaults::BLOCK_BYTES
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any geometry
    /// error reported by [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every level and the backing store divide into whole blocks and sets.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking the block size, then
    /// each level in order, then the backing store.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_bytes == 0 || self.block_bytes % WORD_SIZE != 0 {
            return Err(ConfigError::BlockSize {
                block_bytes: self.block_bytes,
                word: WORD_SIZE,
            });
        }
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for level in &self.levels {
            if level.ways == 0 {
                return Err(ConfigError::ZeroWays {
                    name: level.name.clone(),
                });
            }
            let set_bytes = self.block_bytes.checked_mul(level.ways).ok_or_else(|| {
                ConfigError::SetOverflow {
                    name: level.name.clone(),
                    block_bytes: self.block_bytes,
                    ways: level.ways,
                }
            })?;
            if level.size_bytes == 0 || level.size_bytes % set_bytes != 0 {
                return Err(ConfigError::LevelSize {
                    name: level.name.clone(),
                    size_bytes: level.size_bytes,
                    set_bytes,
                });
            }
        }
        if self.memory.size_bytes == 0 || self.memory.size_bytes % self.block_bytes != 0 {
            return Err(ConfigError::MemorySize {
                size_bytes: self.memory.size_bytes,
                block_bytes: self.block_bytes,
            });
        }
        Ok(())
    }

    /// A single-line direct-mapped cache directly over DRAM.
    pub fn single_line() -> Self {
        Self {
            block_bytes: BLOCK_SIZE,
            levels: vec![CacheConfig {
                name: "L1".to_string(),
                size_bytes: BLOCK_SIZE,
                ..CacheConfig::default()
            }],
            memory: MemoryConfig::default(),
        }
    }

    /// A 256-block direct-mapped L1 directly over DRAM.
    pub fn direct_mapped() -> Self {
        Self {
            block_bytes: BLOCK_SIZE,
            levels: vec![CacheConfig::l1()],
            memory: MemoryConfig::default(),
        }
    }

    /// A direct-mapped L1 over a direct-mapped 512-block L2.
    pub fn two_level_direct() -> Self {
        Self {
            block_bytes: BLOCK_SIZE,
            levels: vec![
                CacheConfig::l1(),
                CacheConfig {
                    ways: 1,
                    ..CacheConfig::l2()
                },
            ],
            memory: MemoryConfig::default(),
        }
    }
}

impl Default for Config {
    /// The reference hierarchy: direct-mapped L1, 2-way LRU L2, DRAM.
    fn default() -> Self {
        Self {
            block_bytes: defaults::BLOCK_BYTES,
            levels: vec![CacheConfig::l1(), CacheConfig::l2()],
            memory: MemoryConfig::default(),
        }
    }
}

/// Individual cache level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Display name used in logs and statistics
    #[serde(default = "CacheConfig::default_name")]
    pub name: String,

    /// Total cache size in bytes
    #[serde(default = "CacheConfig::default_size")]
    pub size_bytes: usize,

    /// Associativity (number of ways)
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Latency charged for every read served by this level
    #[serde(default = "CacheConfig::default_read_latency")]
    pub read_latency: u64,

    /// Latency charged for every write served by this level
    #[serde(default = "CacheConfig::default_write_latency")]
    pub write_latency: u64,

    /// Replacement policy
    #[serde(default)]
    pub policy: ReplacementPolicy,
}

impl CacheConfig {
    /// Returns the default level name.
    fn default_name() -> String {
        "cache".to_string()
    }

    /// Returns the default cache size in bytes.
    fn default_size() -> usize {
        defaults::CACHE_SIZE
    }

    /// Returns the default cache associativity (number of ways).
    fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }

    /// Returns the default read latency.
    fn default_read_latency() -> u64 {
        defaults::CACHE_READ_LATENCY
    }

    /// Returns the default write latency.
    fn default_write_latency() -> u64 {
        defaults::CACHE_WRITE_LATENCY
    }

    /// The reference first-level cache: 256 blocks, direct-mapped, 1/1 latency.
    pub fn l1() -> Self {
        Self {
            name: "L1".to_string(),
            size_bytes: L1_SIZE,
            ways: 1,
            read_latency: L1_READ_TIME,
            write_latency: L1_WRITE_TIME,
            policy: ReplacementPolicy::Lru,
        }
    }

    /// The reference second-level cache: 512 blocks, 2-way LRU, 10/5 latency.
    pub fn l2() -> Self {
        Self {
            name: "L2".to_string(),
            size_bytes: L2_SIZE,
            ways: L2_WAYS,
            read_latency: L2_READ_TIME,
            write_latency: L2_WRITE_TIME,
            policy: ReplacementPolicy::Lru,
        }
    }
}

impl Default for CacheConfig {
    /// Creates a default cache configuration.
    ///
    /// Direct-mapped, LRU replacement, L1 size and latencies.
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            size_bytes: defaults::CACHE_SIZE,
            ways: defaults::CACHE_WAYS,
            read_latency: defaults::CACHE_READ_LATENCY,
            write_latency: defaults::CACHE_WRITE_LATENCY,
            policy: ReplacementPolicy::default(),
        }
    }
}

/// Backing store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Total memory size in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size_bytes: usize,

    /// Latency of one block read
    #[serde(default = "MemoryConfig::default_read_latency")]
    pub read_latency: u64,

    /// Latency of one block write
    #[serde(default = "MemoryConfig::default_write_latency")]
    pub write_latency: u64,
}

impl MemoryConfig {
    /// Returns the default memory size in bytes.
    fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }

    /// Returns the default block read latency.
    fn default_read_latency() -> u64 {
        defaults::MEMORY_READ_LATENCY
    }

    /// Returns the default block write latency.
    fn default_write_latency() -> u64 {
        defaults::MEMORY_WRITE_LATENCY
    }
}

impl Default for MemoryConfig {
    /// 1024 blocks of DRAM with 100/50 read/write latency.
    fn default() -> Self {
        Self {
            size_bytes: defaults::MEMORY_SIZE,
            read_latency: defaults::MEMORY_READ_LATENCY,
            write_latency: defaults::MEMORY_WRITE_LATENCY,
        }
    }
}
