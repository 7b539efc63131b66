//! Memory Access Types.
//!
//! This module defines the classification of accesses flowing through the hierarchy.
//! These types are used for the following:
//! 1. **Data Movement:** Selecting the copy direction between a caller buffer and a line.
//! 2. **Timing:** Selecting the read or write latency of each level.
//! 3. **Statistics Tracking:** Counting reads and writes per level.

/// Type of memory access operation.
///
/// A closed two-variant enum, so every access is either a read or a write and
/// there is no mode value that silently does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read access.
    ///
    /// Copies bytes from the serving level into the caller buffer.
    Read,

    /// Data write access.
    ///
    /// Copies bytes from the caller buffer into the serving level and marks the
    /// receiving line dirty.
    Write,
}
