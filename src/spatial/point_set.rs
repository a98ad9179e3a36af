//! Read-only view shared by every point-set representation

use crate::spatial::point::Point;
use crate::spatial::rectangle::Rectangle;

/// Finite set of grid points that can be queried and enumerated
///
/// Implemented by dense rectangles, sparse [`SpatialRegion`]s and bit-per-cell
/// [`RegionMask`]s so the set algebra in [`crate::algorithm::algebra`] can mix
/// them freely.
///
/// [`SpatialRegion`]: crate::spatial::region::SpatialRegion
/// [`RegionMask`]: crate::spatial::mask::RegionMask
pub trait PointSet {
    /// Inclusive minimum and maximum corners of the bounding box, or `None` for an empty set
    fn extents(&self) -> Option<(Point, Point)>;

    /// Smallest rectangle containing every point, or [`Rectangle::EMPTY`] for an empty set
    ///
    /// The size must fit in `i32`, so a set spanning more than `i32::MAX`
    /// cells on one axis has no representable bounds. Use
    /// [`PointSet::extents`] for such sets.
    fn bounds(&self) -> Rectangle {
        self.extents()
            .map_or(Rectangle::EMPTY, |(min, max)| Rectangle::with_extents(min, max))
    }

    /// Number of distinct points
    fn count(&self) -> usize;

    /// Membership test
    fn contains_point(&self, position: Point) -> bool;

    /// Every point exactly once, in the representation's natural order
    fn points(&self) -> impl Iterator<Item = Point> + '_;
}

impl PointSet for Rectangle {
    fn extents(&self) -> Option<(Point, Point)> {
        if self.is_empty() {
            None
        } else {
            Some((self.min_extent(), self.max_extent()))
        }
    }

    fn bounds(&self) -> Rectangle {
        if self.is_empty() { Self::EMPTY } else { *self }
    }

    fn count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    fn contains_point(&self, position: Point) -> bool {
        self.contains(position)
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.positions()
    }
}

/// Whether two bounding boxes, given as inclusive extents, share a cell
pub fn extents_overlap(a: Option<(Point, Point)>, b: Option<(Point, Point)>) -> bool {
    match (a, b) {
        (Some((a_min, a_max)), Some((b_min, b_max))) => {
            a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
        }
        _ => false,
    }
}

/// Whether the `inner` bounding box lies within `outer`; nothing lies within everything
pub fn extents_within(inner: Option<(Point, Point)>, outer: Option<(Point, Point)>) -> bool {
    match (inner, outer) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some((inner_min, inner_max)), Some((outer_min, outer_max))) => {
            outer_min.x <= inner_min.x
                && inner_max.x <= outer_max.x
                && outer_min.y <= inner_min.y
                && inner_max.y <= outer_max.y
        }
    }
}
