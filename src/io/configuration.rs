//! Geometry constants and runtime configuration defaults

use crate::spatial::orientation::YAxis;

/// Smallest extent either half of a bisection may have
pub const MINIMUM_BISECTION_EXTENT: i32 = 3;

/// Fixed seed for reproducible partitioning
pub const DEFAULT_SEED: u64 = 42;

/// Vertical axis orientation used when none is specified (array coordinates)
pub const DEFAULT_Y_AXIS: YAxis = YAxis::Downward;
