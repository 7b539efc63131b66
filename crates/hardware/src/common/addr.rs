//! Address Decomposition.
//!
//! This module splits flat byte addresses into the fields a cache level uses to
//! locate data. It provides the following:
//! 1. **Field Extraction:** `(tag, index, offset)` per level geometry.
//! 2. **Reconstruction:** The exact inverse, used to compute fill and write-back addresses.
//!
//! For a level with `num_sets` sets of `block_bytes` blocks, the span is
//! `num_sets * block_bytes` and every address satisfies
//! `tag * span + index * block_bytes + offset == address`.

/// The three fields of an address as seen by one cache level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddrParts {
    /// Identifies which block occupies a line.
    pub tag: u64,
    /// Selects the set.
    pub index: usize,
    /// Selects a byte within the block.
    pub offset: usize,
}

/// Set/block geometry of a single cache level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    block_bytes: usize,
    num_sets: usize,
}

impl Geometry {
    /// Creates a geometry for `num_sets` sets of `block_bytes`-byte blocks.
    ///
    /// Both values must be non-zero; callers validate configuration first.
    pub const fn new(block_bytes: usize, num_sets: usize) -> Self {
        Self {
            block_bytes,
            num_sets,
        }
    }

    /// Block size in bytes.
    #[inline(always)]
    pub const fn block_bytes(&self) -> usize {
        self.block_bytes
    }

    /// Number of sets.
    #[inline(always)]
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Bytes covered by one pass over every set (`num_sets * block_bytes`).
    #[inline(always)]
    pub const fn span(&self) -> u64 {
        (self.num_sets * self.block_bytes) as u64
    }

    /// Splits `addr` into its tag, set index, and block offset.
    #[inline]
    pub const fn decompose(&self, addr: u64) -> AddrParts {
        let block = self.block_bytes as u64;
        AddrParts {
            tag: addr / self.span(),
            index: ((addr / block) % self.num_sets as u64) as usize,
            offset: (addr % block) as usize,
        }
    }

    /// Rebuilds the address described by `parts`.
    #[inline]
    pub const fn compose(&self, parts: AddrParts) -> u64 {
        parts.tag * self.span() + (parts.index * self.block_bytes) as u64 + parts.offset as u64
    }
}
