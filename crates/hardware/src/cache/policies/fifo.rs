//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the line that was installed earliest, regardless of how
//! recently it was accessed. Installation order comes from the fill timestamp
//! each line receives when it is loaded.
//!
//! # Performance
//!
//! - **Time Complexity:** `get_victim()`: O(W)
//! - **Best Case:** Streaming accesses where all lines have equal importance
//! - **Worst Case:** Workloads with strong temporal locality (may evict frequently-used lines)

use super::ReplacementPolicy;
use crate::cache::CacheLine;

/// FIFO Policy (stateless).
#[derive(Clone, Copy, Debug, Default)]
pub struct FifoPolicy;

impl ReplacementPolicy for FifoPolicy {
    fn get_victim(&mut self, set: &[CacheLine]) -> usize {
        set.iter()
            .enumerate()
            .min_by_key(|(_, line)| line.filled_at)
            .map_or(0, |(way, _)| way)
    }
}
