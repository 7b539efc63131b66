//! # Unit Components
//!
//! This module serves as the central hub for the component tests of the
//! hierarchy: address arithmetic, configuration, cache levels, the backing
//! store, the facade, and statistics.





/// Unit tests for the clock and the hierarchy facade.
pub mod sim;
