//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the memory hierarchy. It provides:
//! 1. **Per-level counters:** Reads, writes, hits, misses, and write-backs for each cache level.
//! 2. **Memory counters:** Block reads and writes served by the backing store.
//! 3. **Reporting:** A plain-text report and JSON export of a hierarchy snapshot.

use serde::Serialize;

/// Access counters for one cache level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    /// Level name from configuration.
    pub name: String,
    /// Read requests received.
    pub reads: u64,
    /// Write requests received.
    pub writes: u64,
    /// Requests served from a resident line.
    pub hits: u64,
    /// Requests that required a fill from the next level.
    pub misses: u64,
    /// Dirty lines written to the next level on eviction or flush.
    pub writebacks: u64,
}

impl LevelStats {
    /// Creates zeroed counters for the named level.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Total requests received.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of requests that hit, or 0.0 when idle.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Fraction of requests that missed, or 0.0 when idle.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses() == 0 {
            0.0
        } else {
            1.0 - self.hit_rate()
        }
    }

    /// Clears every counter but keeps the name.
    pub fn clear(&mut self) {
        *self = Self::named(&self.name);
    }
}

/// Transfer counters for the backing store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    /// Block reads served.
    pub reads: u64,
    /// Block writes absorbed.
    pub writes: u64,
}

/// Snapshot of a whole hierarchy's counters and elapsed time.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HierarchyStats {
    /// Simulated time at the moment of the snapshot.
    pub time: u64,
    /// Per-level counters, closest to the caller first.
    pub levels: Vec<LevelStats>,
    /// Backing store counters.
    pub memory: MemoryStats,
}

impl HierarchyStats {
    /// Serializes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates any `serde_json` serialization failure.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Prints the snapshot to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("MEMORY HIERARCHY STATISTICS");
        println!("==========================================================");
        println!("sim_time                 {}", self.time);
        println!("----------------------------------------------------------");
        for level in &self.levels {
            println!(
                "  {:<6} accesses: {:<10} | hits: {:<10} | miss_rate: {:.2}% | writebacks: {}",
                level.name,
                level.accesses(),
                level.hits,
                level.miss_rate() * 100.0,
                level.writebacks
            );
        }
        println!(
            "  {:<6} reads: {:<13} | writes: {}",
            "DRAM", self.memory.reads, self.memory.writes
        );
        println!("==========================================================");
    }
}
