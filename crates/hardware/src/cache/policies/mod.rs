//! Cache Replacement Policies.
//!
//! Implements the algorithms that pick a victim way in a full set. Every policy
//! reads only the per-line metadata (access and fill timestamps), so the cache
//! level keeps a single source of truth for recency.
//!
//! Invalid ways are filled before any policy is consulted; a policy is only asked
//! to choose among valid lines.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, smallest access timestamp.
//! - `Fifo`: First-In, First-Out, smallest fill timestamp.
//! - `Mru`: Most Recently Used, largest access timestamp.
//! - `Random`: Pseudo-random way from a fixed-seed generator.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Most Recently Used replacement policy.
pub mod mru;

/// Random replacement policy.
pub mod random;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use mru::MruPolicy;
pub use random::RandomPolicy;

use super::CacheLine;
use crate::config::ReplacementPolicy as PolicyType;

/// Trait for cache replacement policies.
pub trait ReplacementPolicy: Send + Sync {
    /// Selects a victim way in a set whose ways are all valid.
    ///
    /// # Arguments
    ///
    /// * `set` - The lines of the set, indexed by way.
    ///
    /// # Returns
    ///
    /// The index of the way to evict.
    fn get_victim(&mut self, set: &[CacheLine]) -> usize;
}

/// Builds the policy selected in configuration.
pub fn build(policy: PolicyType) -> Box<dyn ReplacementPolicy> {
    match policy {
        PolicyType::Lru => Box::new(LruPolicy),
        PolicyType::Fifo => Box::new(FifoPolicy),
        PolicyType::Mru => Box::new(MruPolicy),
        PolicyType::Random => Box::new(RandomPolicy::default()),
    }
}
