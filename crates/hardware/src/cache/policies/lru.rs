//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the cache line whose last access happened earliest in
//! simulated time. Recency is read from the timestamp the level stamps on every
//! hit and fill, so no per-set usage stack is kept.
//!
//! Ties (equal timestamps) go to the lowest way.
//!
//! # Performance
//!
//! - **Time Complexity:** `get_victim()`: O(W) where W is the number of ways
//! - **Space Complexity:** O(1) beyond the line metadata
//! - **Best Case:** Workloads with good temporal locality
//! - **Worst Case:** Scanning patterns larger than cache capacity (thrashing)

use super::ReplacementPolicy;
use crate::cache::CacheLine;

/// LRU Policy (stateless).
#[derive(Clone, Copy, Debug, Default)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    /// Returns the way with the smallest `last_access`.
    fn get_victim(&mut self, set: &[CacheLine]) -> usize {
        set.iter()
            .enumerate()
            .min_by_key(|(_, line)| line.last_access)
            .map_or(0, |(way, _)| way)
    }
}
