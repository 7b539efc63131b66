//! Simulation driver state.
//!
//! Provides the simulated clock and the hierarchy facade that ties the cache
//! levels, the backing store, and the clock together.

/// Monotonic simulated-time counter.
pub mod clock;

/// Access facade owning every level of the hierarchy.
pub mod hierarchy;

pub use clock::Clock;
pub use hierarchy::Hierarchy;
