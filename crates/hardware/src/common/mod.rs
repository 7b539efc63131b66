//! Common utilities and types used throughout the memory hierarchy simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Address Decomposition:** Tag/index/offset splitting and its inverse.
//! 2. **Constants:** Reference word, block, and level sizes plus latencies.
//! 3. **Memory Access:** The closed read/write access type.
//! 4. **Error Handling:** Access and configuration errors.

/// Address decomposition per level geometry.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::{AddrParts, Geometry};
pub use constants::{BLOCK_SIZE, WORD_SIZE};
pub use data::AccessType;
pub use error::{AccessError, ConfigError};
