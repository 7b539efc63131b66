//! Simulated time.
//!
//! A single monotonic counter shared by every component of a hierarchy. Each
//! level advances it by its own latency for every access it serves, and cache
//! levels read it to timestamp lines for recency-based replacement.

/// Monotonic simulated-time counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    now: u64,
}

impl Clock {
    /// Creates a clock at time zero.
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    /// Returns the current time.
    #[inline(always)]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Advances time by `cycles`, saturating at `u64::MAX`.
    #[inline(always)]
    pub const fn advance(&mut self, cycles: u64) {
        self.now = self.now.saturating_add(cycles);
    }

    /// Sets time back to zero.
    pub const fn reset(&mut self) {
        self.now = 0;
    }
}
