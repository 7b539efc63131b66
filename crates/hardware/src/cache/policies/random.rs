//! Random Replacement Policy.
//!
//! This policy evicts a pseudo-random line from the set. It uses a xorshift
//! generator with a fixed seed so that runs stay reproducible.

use super::ReplacementPolicy;
use crate::cache::CacheLine;

/// Seed used by [`RandomPolicy::default`].
const DEFAULT_SEED: u64 = 123456789;

/// Random Policy state.
#[derive(Clone, Copy, Debug)]
pub struct RandomPolicy {
    state: u64,
}

impl RandomPolicy {
    /// Creates a policy from a non-zero seed. A zero seed is replaced by the default.
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl ReplacementPolicy for RandomPolicy {
    fn get_victim(&mut self, set: &[CacheLine]) -> usize {
        if set.is_empty() {
            return 0;
        }
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x % set.len() as u64) as usize
    }
}
