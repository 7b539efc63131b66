//! Facade and clock tests.



/// Randomized round-trip and consistency properties.
pub mod properties;
