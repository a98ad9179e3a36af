//! Integer 2D grid primitives: points, axis-aligned rectangles and arbitrary point sets
//!
//! Rectangles use half-open membership, regions keep their bounding box current
//! under insertion and removal, and rectangles can be split into exact random
//! tilings with a caller-supplied random source.

#![forbid(unsafe_code)]

/// Set algebra, exact tilings and tiling verification
pub mod algorithm;
/// Error handling, configuration constants and data-shape conversions
pub mod io;
/// Points, rectangles, orientation and point-set representations
pub mod spatial;

pub use algorithm::partition::{PartitionConfig, RectanglePartitioner};
pub use io::error::{GeometryError, Result};
pub use spatial::{Direction, Point, PointSet, Rectangle, RegionMask, SpatialRegion, YAxis};
