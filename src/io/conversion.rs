//! Conversions between geometry types and plain data shapes
//!
//! Rectangles convert to and from `(x, y, width, height)` and
//! `(min_extent, max_extent)` tuples, and regions to and from ordered point
//! lists. Every conversion round-trips. With the `serde` feature, a region
//! serializes as its ordered point list.

use crate::spatial::point::Point;
use crate::spatial::rectangle::Rectangle;
use crate::spatial::region::SpatialRegion;

impl Point {
    /// Create a point from an `(x, y)` tuple
    pub const fn from_tuple((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }

    /// Project to an `(x, y)` tuple
    pub const fn to_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from(tuple: (i32, i32)) -> Self {
        Self::from_tuple(tuple)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        point.to_tuple()
    }
}

impl Rectangle {
    /// Create a rectangle from an `(x, y, width, height)` tuple
    pub const fn from_tuple((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, width, height)
    }

    /// Project to an `(x, y, width, height)` tuple
    pub const fn to_tuple(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Create a rectangle from an inclusive `(min_extent, max_extent)` tuple
    pub const fn from_extents((min_extent, max_extent): (Point, Point)) -> Self {
        Self::with_extents(min_extent, max_extent)
    }

    /// Project to an inclusive `(min_extent, max_extent)` tuple
    pub const fn to_extents(&self) -> (Point, Point) {
        (self.min_extent(), self.max_extent())
    }

    /// Whether this rectangle equals its `(x, y, width, height)` projection `tuple`
    pub const fn matches_tuple(&self, tuple: (i32, i32, i32, i32)) -> bool {
        self.x == tuple.0 && self.y == tuple.1 && self.width == tuple.2 && self.height == tuple.3
    }

    /// Whether this rectangle has exactly the given inclusive extents
    pub const fn matches_extents(&self, (min_extent, max_extent): (Point, Point)) -> bool {
        let max = self.max_extent();
        self.x == min_extent.x
            && self.y == min_extent.y
            && max.x == max_extent.x
            && max.y == max_extent.y
    }
}

impl From<(i32, i32, i32, i32)> for Rectangle {
    fn from(tuple: (i32, i32, i32, i32)) -> Self {
        Self::from_tuple(tuple)
    }
}

impl From<Rectangle> for (i32, i32, i32, i32) {
    fn from(rect: Rectangle) -> Self {
        rect.to_tuple()
    }
}

impl From<(Point, Point)> for Rectangle {
    fn from(extents: (Point, Point)) -> Self {
        Self::from_extents(extents)
    }
}

impl From<Rectangle> for (Point, Point) {
    fn from(rect: Rectangle) -> Self {
        rect.to_extents()
    }
}

impl SpatialRegion {
    /// Ordered point list, as enumerated
    pub fn to_points(&self) -> Vec<Point> {
        self.positions().to_vec()
    }
}

impl From<Vec<Point>> for SpatialRegion {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

impl From<&SpatialRegion> for Vec<Point> {
    fn from(region: &SpatialRegion) -> Self {
        region.to_points()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::spatial::point::Point;
    use crate::spatial::region::SpatialRegion;

    impl Serialize for SpatialRegion {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.positions())
        }
    }

    impl<'de> Deserialize<'de> for SpatialRegion {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let points = Vec::<Point>::deserialize(deserializer)?;
            Ok(Self::from_points(points))
        }
    }
}
