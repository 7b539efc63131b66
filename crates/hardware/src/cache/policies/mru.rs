//! Most Recently Used (MRU) Replacement Policy.
//!
//! This policy evicts the cache line that was accessed most recently.
//! While counter-intuitive for standard workloads, MRU is optimal for
//! cyclic access patterns (loops) where the dataset is larger than the cache.

use std::cmp::Reverse;

use super::ReplacementPolicy;
use crate::cache::CacheLine;

/// MRU Policy (stateless).
#[derive(Clone, Copy, Debug, Default)]
pub struct MruPolicy;

impl ReplacementPolicy for MruPolicy {
    /// Returns the way with the largest `last_access`, lowest way on ties.
    fn get_victim(&mut self, set: &[CacheLine]) -> usize {
        set.iter()
            .enumerate()
            .min_by_key(|(_, line)| Reverse(line.last_access))
            .map_or(0, |(way, _)| way)
    }
}
