//! Access and Configuration Errors.
//!
//! This module defines the error types for the simulator. It provides:
//! 1. **Access Errors:** Requests that fall outside the backing store or break alignment.
//! 2. **Configuration Errors:** Level geometries that cannot be built.
//!
//! Access errors are raised before any cache or clock state changes, so a rejected
//! request leaves the hierarchy exactly as it was.

use thiserror::Error;

/// Error returned by a rejected memory access.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The request reaches past the end of the backing store.
    ///
    /// This is a bug in the request stream, not a transient condition, and is
    /// never retried.
    #[error("access of {len} bytes at {addr:#x} exceeds store size {size:#x}")]
    OutOfBounds {
        /// Requested start address.
        addr: u64,
        /// Requested length in bytes.
        len: usize,
        /// Size of the backing store in bytes.
        size: usize,
    },

    /// The request is not aligned to the granularity of the receiving component.
    #[error("address {addr:#x} is not aligned to {align} bytes")]
    Misaligned {
        /// Requested start address.
        addr: u64,
        /// Required alignment in bytes.
        align: usize,
    },

    /// A probe named a cache level that does not exist.
    #[error("cache level {level} does not exist (hierarchy has {levels} levels)")]
    LevelOutOfRange {
        /// Requested level.
        level: usize,
        /// Number of levels in the hierarchy.
        levels: usize,
    },
}

/// Error returned when a configuration cannot describe a valid hierarchy.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No cache levels were given.
    #[error("hierarchy needs at least one cache level")]
    NoLevels,

    /// Block size is zero or not a whole number of words.
    #[error("block size {block_bytes} is not a non-zero multiple of the word size {word}")]
    BlockSize {
        /// Configured block size.
        block_bytes: usize,
        /// Word size in bytes.
        word: usize,
    },

    /// A level has zero ways.
    #[error("cache level `{name}` has zero ways")]
    ZeroWays {
        /// Level name.
        name: String,
    },

    /// A level's size does not divide into whole sets.
    #[error("cache level `{name}` size {size_bytes} is not a non-zero multiple of {set_bytes} (block size x ways)")]
    LevelSize {
        /// Level name.
        name: String,
        /// Configured size in bytes.
        size_bytes: usize,
        /// Bytes per set.
        set_bytes: usize,
    },

    /// A level's block size times associativity does not fit in `usize`.
    #[error("cache level `{name}` has {ways} ways of {block_bytes}-byte blocks, which overflows the set size")]
    SetOverflow {
        /// Level name.
        name: String,
        /// Configured block size.
        block_bytes: usize,
        /// Configured associativity.
        ways: usize,
    },

    /// Backing store size does not divide into whole blocks.
    #[error("memory size {size_bytes} is not a non-zero multiple of the block size {block_bytes}")]
    MemorySize {
        /// Configured memory size.
        size_bytes: usize,
        /// Configured block size.
        block_bytes: usize,
    },

    /// The configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
