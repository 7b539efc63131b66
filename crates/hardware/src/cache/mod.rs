//! Set-Associative Write-Back Cache Level.
//!
//! This module implements one level of the hierarchy. A level with one way per
//! set is a direct-mapped cache; any other associativity searches the set and
//! consults a replacement policy when every way is valid. It models hits, misses,
//! dirty write-backs, and the latency each of them costs.
//!
//! Lines live in a flat arena indexed by `index * ways + way`, and their block
//! data lives in a parallel byte arena, so no line owns a separate allocation.

/// Cache replacement policy implementations (LRU, FIFO, MRU, Random).
pub mod policies;

use std::fmt;
use std::ops::Range;

use tracing::{debug, trace};

use self::policies::ReplacementPolicy;
use crate::common::addr::{AddrParts, Geometry};
use crate::common::data::AccessType;
use crate::common::error::AccessError;
use crate::config::CacheConfig;
use crate::sim::clock::Clock;
use crate::stats::LevelStats;

/// The component a cache level fetches from and writes back to.
///
/// Implemented by the backing store and by the chain of levels below a cache.
pub trait NextLevel {
    /// Transfers `buf.len()` bytes at `addr` between `buf` and this component,
    /// advancing `clock` by whatever the transfer costs.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the component cannot serve the address.
    fn access(
        &mut self,
        addr: u64,
        buf: &mut [u8],
        access: AccessType,
        clock: &mut Clock,
    ) -> Result<(), AccessError>;
}

/// Cache line metadata: validity, dirtiness, tag, and timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// The line holds a block.
    pub valid: bool,
    /// The block is newer than the copy in the next level.
    pub dirty: bool,
    /// Tag of the resident block.
    pub tag: u64,
    /// Time of the most recent hit or fill.
    pub last_access: u64,
    /// Time the resident block was installed.
    pub filled_at: u64,
}

/// Location and metadata of a resident block, as reported by [`CacheLevel::probe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resident {
    /// Set index.
    pub index: usize,
    /// Way within the set.
    pub way: usize,
    /// Line metadata.
    pub line: CacheLine,
}

/// One write-back cache level.
pub struct CacheLevel {
    name: String,
    geometry: Geometry,
    ways: usize,
    read_latency: u64,
    write_latency: u64,
    lines: Vec<CacheLine>,
    data: Vec<u8>,
    policy: Box<dyn ReplacementPolicy>,
    stats: LevelStats,
}

impl CacheLevel {
    /// Creates an empty level (every line invalid, data zeroed).
    ///
    /// # Arguments
    ///
    /// * `config` - Size, associativity, latencies, and policy. Must already be validated.
    /// * `block_bytes` - Block size shared by the hierarchy.
    pub fn new(config: &CacheConfig, block_bytes: usize) -> Self {
        let ways = config.ways.max(1);
        let num_lines = config.size_bytes / block_bytes;
        let num_sets = (num_lines / ways).max(1);

        Self {
            name: config.name.clone(),
            geometry: Geometry::new(block_bytes, num_sets),
            ways,
            read_latency: config.read_latency,
            write_latency: config.write_latency,
            lines: vec![CacheLine::default(); num_sets * ways],
            data: vec![0; num_sets * ways * block_bytes],
            policy: policies::build(config.policy),
            stats: LevelStats::named(&config.name),
        }
    }

    /// Level name from configuration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Address split used by this level.
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Associativity.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Total number of lines.
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Latency charged for serving a request of the given type.
    pub const fn latency(&self, access: AccessType) -> u64 {
        match access {
            AccessType::Read => self.read_latency,
            AccessType::Write => self.write_latency,
        }
    }

    /// Counters accumulated since construction or the last reset.
    pub const fn stats(&self) -> &LevelStats {
        &self.stats
    }

    /// Clears the counters.
    pub fn reset_stats(&mut self) {
        self.stats.clear();
    }

    /// Lines of the set at `index`, indexed by way.
    ///
    /// Returns `None` if `index` is not a set of this level.
    pub fn set(&self, index: usize) -> Option<&[CacheLine]> {
        let start = index.checked_mul(self.ways)?;
        self.lines.get(start..start.checked_add(self.ways)?)
    }

    /// Returns every line to invalid, clean, tag zero, with zeroed data.
    ///
    /// Dirty data is discarded, not written back.
    pub fn invalidate_all(&mut self) {
        self.lines.fill(CacheLine::default());
        self.data.fill(0);
    }

    /// Finds the line holding `addr` without touching timing or recency.
    pub fn probe(&self, addr: u64) -> Option<Resident> {
        let parts = self.geometry.decompose(addr);
        self.lookup(parts).map(|way| Resident {
            index: parts.index,
            way,
            line: self.lines[self.slot(parts.index, way)],
        })
    }

    /// Returns `len` resident bytes at `addr` if the block is present.
    ///
    /// Returns `None` on a miss or if the range crosses the block boundary.
    pub fn resident_bytes(&self, addr: u64, len: usize) -> Option<&[u8]> {
        let parts = self.geometry.decompose(addr);
        if parts
            .offset
            .checked_add(len)
            .is_none_or(|end| end > self.geometry.block_bytes())
        {
            return None;
        }
        let way = self.lookup(parts)?;
        let start = self.block_range(self.slot(parts.index, way)).start + parts.offset;
        Some(&self.data[start..start + len])
    }

    #[inline(always)]
    const fn slot(&self, index: usize, way: usize) -> usize {
        index * self.ways + way
    }

    #[inline(always)]
    const fn block_range(&self, slot: usize) -> Range<usize> {
        let block = self.geometry.block_bytes();
        slot * block..(slot + 1) * block
    }

    /// Lines of a set whose index came from `decompose`, so it is always in range.
    #[inline(always)]
    fn set_lines(&self, index: usize) -> &[CacheLine] {
        let start = index * self.ways;
        &self.lines[start..start + self.ways]
    }

    fn lookup(&self, parts: AddrParts) -> Option<usize> {
        self.set_lines(parts.index)
            .iter()
            .position(|line| line.valid && line.tag == parts.tag)
    }

    /// First invalid way, or the policy's choice when the set is full.
    fn choose_victim(&mut self, index: usize) -> usize {
        let start = index * self.ways;
        let set = &self.lines[start..start + self.ways];
        match set.iter().position(|line| !line.valid) {
            Some(way) => way,
            None => self.policy.get_victim(set),
        }
    }

    /// Serves a request of `buf.len()` bytes at `addr`.
    ///
    /// The range must stay inside one block. On a miss the victim way is written
    /// back to `next` if dirty, the block is fetched from `next`, and the request
    /// is then served from the freshly filled line. Writes always leave the line
    /// dirty, including writes that missed.
    ///
    /// # Errors
    ///
    /// Propagates any [`AccessError`] raised by `next` during a write-back or fill.
    pub fn access<N: NextLevel + ?Sized>(
        &mut self,
        addr: u64,
        buf: &mut [u8],
        access: AccessType,
        clock: &mut Clock,
        next: &mut N,
    ) -> Result<(), AccessError> {
        let parts = self.geometry.decompose(addr);
        debug_assert!(parts.offset + buf.len() <= self.geometry.block_bytes());

        match access {
            AccessType::Read => self.stats.reads += 1,
            AccessType::Write => self.stats.writes += 1,
        }

        let way = if let Some(way) = self.lookup(parts) {
            self.stats.hits += 1;
            trace!(cache = %self.name, addr, ?access, way, "hit");
            way
        } else {
            self.stats.misses += 1;
            debug!(cache = %self.name, addr, ?access, index = parts.index, "miss");
            self.fill(parts, clock, next)?
        };

        let slot = self.slot(parts.index, way);
        self.lines[slot].last_access = clock.now();

        let start = self.block_range(slot).start + parts.offset;
        let bytes = &mut self.data[start..start + buf.len()];
        match access {
            AccessType::Read => buf.copy_from_slice(bytes),
            AccessType::Write => {
                bytes.copy_from_slice(buf);
                self.lines[slot].dirty = true;
            }
        }

        clock.advance(self.latency(access));
        Ok(())
    }

    /// Installs the block described by `parts`, evicting a victim first.
    fn fill<N: NextLevel + ?Sized>(
        &mut self,
        parts: AddrParts,
        clock: &mut Clock,
        next: &mut N,
    ) -> Result<usize, AccessError> {
        let way = self.choose_victim(parts.index);
        let slot = self.slot(parts.index, way);
        let victim = self.lines[slot];
        let range = self.block_range(slot);

        if victim.valid && victim.dirty {
            let victim_addr = self.geometry.compose(AddrParts {
                tag: victim.tag,
                index: parts.index,
                offset: 0,
            });
            debug!(cache = %self.name, victim_addr, way, "write-back on eviction");
            next.access(
                victim_addr,
                &mut self.data[range.clone()],
                AccessType::Write,
                clock,
            )?;
            self.stats.writebacks += 1;
        } else if victim.valid {
            trace!(cache = %self.name, tag = victim.tag, way, "clean eviction");
        }

        let base = self.geometry.compose(AddrParts {
            offset: 0,
            ..parts
        });
        next.access(base, &mut self.data[range], AccessType::Read, clock)?;

        let now = clock.now();
        self.lines[slot] = CacheLine {
            valid: true,
            dirty: false,
            tag: parts.tag,
            last_access: now,
            filled_at: now,
        };
        Ok(way)
    }

    /// Writes every dirty line to `next` and marks it clean.
    ///
    /// Lines stay valid. Each write-back is charged to `clock` by `next`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`AccessError`] raised by `next`; lines already
    /// written stay clean.
    pub fn flush<N: NextLevel + ?Sized>(
        &mut self,
        clock: &mut Clock,
        next: &mut N,
    ) -> Result<(), AccessError> {
        for slot in 0..self.lines.len() {
            let line = self.lines[slot];
            if !(line.valid && line.dirty) {
                continue;
            }
            let addr = self.geometry.compose(AddrParts {
                tag: line.tag,
                index: slot / self.ways,
                offset: 0,
            });
            let range = self.block_range(slot);
            next.access(addr, &mut self.data[range], AccessType::Write, clock)?;
            self.lines[slot].dirty = false;
            self.stats.writebacks += 1;
        }
        debug!(cache = %self.name, "flushed");
        Ok(())
    }
}

impl fmt::Debug for CacheLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheLevel")
            .field("name", &self.name)
            .field("geometry", &self.geometry)
            .field("ways", &self.ways)
            .field("read_latency", &self.read_latency)
            .field("write_latency", &self.write_latency)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
