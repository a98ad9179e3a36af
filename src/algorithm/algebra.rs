//! Set algebra over any mix of point-set representations
//!
//! Every combinator builds a fresh [`SpatialRegion`]; inputs are only read.
//! Result order follows the enumeration order of the inputs.

use crate::spatial::point_set::{PointSet, extents_overlap};
use crate::spatial::rectangle::Rectangle;
use crate::spatial::region::SpatialRegion;

/// Every point in `a` or `b`, those of `a` first
pub fn union_of(a: &impl PointSet, b: &impl PointSet) -> SpatialRegion {
    let mut result = SpatialRegion::new();
    result.add_points(a.points());
    result.add_points(b.points());
    result
}

/// Exactly the points present in both sets
///
/// Returns immediately when the bounding boxes do not overlap, and otherwise
/// walks the smaller set against the larger one's membership test.
pub fn intersection_of(a: &impl PointSet, b: &impl PointSet) -> SpatialRegion {
    if !extents_overlap(a.extents(), b.extents()) {
        return SpatialRegion::new();
    }

    if a.count() <= b.count() {
        a.points().filter(|&pos| b.contains_point(pos)).collect()
    } else {
        b.points().filter(|&pos| a.contains_point(pos)).collect()
    }
}

/// The points of `a` that are not in `b`, in `a`'s order
pub fn difference_of(a: &impl PointSet, b: &impl PointSet) -> SpatialRegion {
    if !extents_overlap(a.extents(), b.extents()) {
        return a.points().collect();
    }
    a.points().filter(|&pos| !b.contains_point(pos)).collect()
}

/// Whether both sets hold exactly the same points, ignoring order
///
/// Compares count, then extents, then membership, cheapest first.
pub fn same_points(a: &impl PointSet, b: &impl PointSet) -> bool {
    a.count() == b.count()
        && a.extents() == b.extents()
        && a.points().all(|pos| b.contains_point(pos))
}

impl Rectangle {
    /// Region holding precisely the points of both rectangles, with no filler
    pub fn get_exact_union(r1: &Self, r2: &Self) -> SpatialRegion {
        union_of(r1, r2)
    }

    /// Region holding the points of `r1` outside `r2`
    ///
    /// Generally not rectangular, hence a region rather than a rectangle.
    pub fn get_difference(r1: &Self, r2: &Self) -> SpatialRegion {
        difference_of(r1, r2)
    }
}
