//! Memory hierarchy simulator library.
//!
//! This crate models a multi-level write-back cache hierarchy over a flat main
//! store, for timing and data-movement simulation:
//! 1. **Caches:** Set-associative (or direct-mapped) write-back levels with pluggable replacement.
//! 2. **Memory:** A byte-addressable backing store with a latency controller.
//! 3. **Timing:** A single monotonic clock advanced by every access at every level.
//! 4. **Facade:** Word-granularity `read`/`write` entry points, flush, and inspection.
//! 5. **Simulation:** Configuration, presets, and statistics collection.

/// Set-associative cache levels and replacement policies.
pub mod cache;
/// Common types and constants (address decomposition, access types, errors).
pub mod common;
/// Simulator configuration (defaults, enums, presets).
pub mod config;
/// Backing store and memory controllers.
pub mod memory;
/// Clock and hierarchy facade.
pub mod sim;
/// Statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Closed read/write access type.
pub use crate::common::AccessType;
/// Access and configuration error types.
pub use crate::common::{AccessError, ConfigError};
/// Top-level simulator; construct with `Hierarchy::new`.
pub use crate::sim::Hierarchy;
