//! Spatial value types and point-set containers
//!
//! This module contains:
//! - Points and compass directions with explicit y-axis orientation
//! - Rectangles, their predicates and boundary enumeration
//! - Sparse and dense point-set representations sharing one read-only trait

/// Perimeter and side enumeration for rectangles
pub mod edges;
/// Dense bit-per-cell point sets
pub mod mask;
/// Vertical axis orientation and compass directions
pub mod orientation;
/// Integer grid coordinates
pub mod point;
/// Read-only point-set trait
pub mod point_set;
/// Arbitrarily-shaped point sets with cached bounds
pub mod region;
/// Axis-aligned rectangles
pub mod rectangle;

pub use mask::RegionMask;
pub use orientation::{Direction, YAxis};
pub use point::Point;
pub use point_set::PointSet;
pub use rectangle::Rectangle;
pub use region::SpatialRegion;
