//! Boundary concerns: errors, constants and conversions to plain data shapes

/// Geometry constants and defaults
pub mod configuration;
/// Tuple and point-list conversions, optional serde support
pub mod conversion;
/// Error types
pub mod error;
