//! Error types for geometry and partitioning operations

use std::fmt;

use crate::spatial::orientation::Direction;

/// Main error type for all geometry operations
///
/// Every variant is a contract violation by the caller. Defined no-ops such as
/// adding a duplicate point or removing an absent one never produce an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Operation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Side enumeration was requested for a direction that is not one of the four axis directions
    NonCardinalSide {
        /// The rejected direction
        direction: Direction,
    },

    /// A set of tiles failed to cover a rectangle exactly once
    InexactTiling {
        /// Cells of the original rectangle covered by no tile
        uncovered: usize,
        /// Cells of the original rectangle covered by more than one tile
        overlapping: usize,
        /// Tile cells lying outside the original rectangle
        outside: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NonCardinalSide { direction } => {
                write!(
                    f,
                    "Cannot retrieve positions on a non-cardinal side of a rectangle ({direction:?})"
                )
            }
            Self::InexactTiling {
                uncovered,
                overlapping,
                outside,
            } => {
                write!(
                    f,
                    "Tiling is not exact: {uncovered} uncovered, {overlapping} overlapping, {outside} outside"
                )
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Convenience type alias for geometry results
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GeometryError {
    GeometryError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
