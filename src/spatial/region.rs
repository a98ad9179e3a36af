//! Arbitrarily-shaped point sets with an incrementally maintained bounding box
//!
//! A [`SpatialRegion`] keeps its points twice: in insertion order, which
//! defines enumeration, and in a hash index for average O(1) membership. The
//! four extents of the bounding box are cached. Adding a point updates them by
//! comparison alone; removing a point that lies on one of the extents forces a
//! full O(n) rescan, so batch removals through [`SpatialRegion::remove_all`]
//! or [`SpatialRegion::remove_where`] instead of many single removes.

use std::collections::HashSet;
use std::fmt;
use std::ops::Add;

use crate::algorithm::algebra::{difference_of, intersection_of, same_points, union_of};
use crate::spatial::point::Point;
use crate::spatial::point_set::{PointSet, extents_overlap, extents_within};
use crate::spatial::rectangle::Rectangle;

/// Mutable, insertion-ordered, duplicate-free set of points
///
/// Not synchronized: share across threads only while no thread mutates it.
#[derive(Clone, Debug)]
pub struct SpatialRegion {
    /// Unique points in insertion order
    positions: Vec<Point>,
    /// Same points as `positions`, for membership tests
    index: HashSet<Point>,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl SpatialRegion {
    /// Create an empty region
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            index: HashSet::new(),
            left: i32::MAX,
            top: i32::MAX,
            right: i32::MIN,
            bottom: i32::MIN,
        }
    }

    /// Create a region from initial points, dropping duplicates
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut region = Self::new();
        region.add_points(points);
        region
    }

    /// Create a region holding every point of a rectangle, row by row
    pub fn from_rectangle(rect: &Rectangle) -> Self {
        let mut region = Self::new();
        region.add_rectangle(rect);
        region
    }

    /// Smallest rectangle containing every point, or [`Rectangle::EMPTY`] when empty
    ///
    /// Points are accepted anywhere in `i32`, but the bounds are only
    /// representable while each axis spans at most `i32::MAX` cells. Equality,
    /// containment and intersection compare [`PointSet::extents`] instead and
    /// work for any coordinates.
    pub const fn bounds(&self) -> Rectangle {
        if self.right < self.left {
            return Rectangle::EMPTY;
        }
        Rectangle::with_extents(
            Point::new(self.left, self.top),
            Point::new(self.right, self.bottom),
        )
    }

    /// Number of distinct points
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the region holds no points
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Points in insertion order
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Iterate points in insertion order
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Point>> {
        self.positions.iter().copied()
    }

    /// Average O(1) membership test
    pub fn contains(&self, position: Point) -> bool {
        self.index.contains(&position)
    }

    /// Whether every point of `other` is in this region
    ///
    /// Fails fast when the bounding boxes already rule containment out. The
    /// empty set is contained in every region.
    pub fn contains_region(&self, other: &impl PointSet) -> bool {
        if other.count() == 0 {
            return true;
        }
        if !extents_within(other.extents(), self.extents()) {
            return false;
        }
        other.points().all(|pos| self.contains(pos))
    }

    /// Whether the two sets share at least one point
    ///
    /// Walks the smaller set against the larger one's membership test, so the
    /// cost is bounded by the smaller count.
    pub fn intersects(&self, other: &impl PointSet) -> bool {
        if !extents_overlap(other.extents(), self.extents()) {
            return false;
        }

        if self.len() <= other.count() {
            self.iter().any(|pos| other.contains_point(pos))
        } else {
            other.points().any(|pos| self.contains(pos))
        }
    }

    /// Add a point, returning whether it was new
    ///
    /// Duplicates are a silent no-op. Bounds are updated in O(1).
    pub fn add(&mut self, position: Point) -> bool {
        if !self.index.insert(position) {
            return false;
        }
        self.positions.push(position);

        self.left = self.left.min(position.x);
        self.right = self.right.max(position.x);
        self.top = self.top.min(position.y);
        self.bottom = self.bottom.max(position.y);
        true
    }

    /// Add every point in iteration order
    pub fn add_points(&mut self, positions: impl IntoIterator<Item = Point>) {
        for pos in positions {
            self.add(pos);
        }
    }

    /// Add every point of a rectangle, row by row
    pub fn add_rectangle(&mut self, rect: &Rectangle) {
        self.add_points(rect.positions());
    }

    /// Add every point of another set, in its enumeration order
    pub fn add_region(&mut self, other: &impl PointSet) {
        self.add_points(other.points());
    }

    /// Remove a single point, returning whether it was present
    ///
    /// O(n) to keep insertion order, plus a full bounds rescan when the point
    /// lay on an extent.
    pub fn remove(&mut self, position: Point) -> bool {
        if !self.index.remove(&position) {
            return false;
        }
        if let Some(slot) = self.positions.iter().position(|&pos| pos == position) {
            self.positions.remove(slot);
        }
        if self.on_extent(position) {
            self.recalculate_bounds();
        }
        true
    }

    /// Remove every point for which `predicate` returns true, returning how many were removed
    pub fn remove_where(&mut self, predicate: impl FnMut(Point) -> bool) -> usize {
        self.remove_matching(predicate)
    }

    /// Remove every point of `positions` present in the region, returning how many were removed
    pub fn remove_points(&mut self, positions: &HashSet<Point>) -> usize {
        if !positions.iter().any(|pos| self.index.contains(pos)) {
            return 0;
        }
        self.remove_matching(|pos| positions.contains(&pos))
    }

    /// Remove every given point present in the region, returning how many were removed
    pub fn remove_all(&mut self, positions: impl IntoIterator<Item = Point>) -> usize {
        let batch: HashSet<Point> = positions.into_iter().collect();
        self.remove_points(&batch)
    }

    /// Remove every point inside a rectangle, returning how many were removed
    pub fn remove_rectangle(&mut self, rect: &Rectangle) -> usize {
        if !extents_overlap(rect.extents(), self.extents()) {
            return 0;
        }
        self.remove_matching(|pos| rect.contains(pos))
    }

    /// Remove every point of another set, returning how many were removed
    pub fn remove_region(&mut self, other: &impl PointSet) -> usize {
        if !extents_overlap(other.extents(), self.extents()) {
            return 0;
        }
        self.remove_matching(|pos| other.contains_point(pos))
    }

    /// Remove every point
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// New region with every point shifted by `delta`, in the same order
    #[must_use]
    pub fn translated(&self, delta: Point) -> Self {
        Self::from_points(self.iter().map(|pos| pos + delta))
    }

    /// Every point in one or both sets
    pub fn get_union(a: &impl PointSet, b: &impl PointSet) -> Self {
        union_of(a, b)
    }

    /// Exactly the points present in both sets
    pub fn get_intersection(a: &impl PointSet, b: &impl PointSet) -> Self {
        intersection_of(a, b)
    }

    /// The points of `a` that are not in `b`
    pub fn get_difference(a: &impl PointSet, b: &impl PointSet) -> Self {
        difference_of(a, b)
    }

    fn remove_matching(&mut self, mut should_remove: impl FnMut(Point) -> bool) -> usize {
        let before = self.positions.len();
        let mut recalculate = false;
        let (left, top, right, bottom) = (self.left, self.top, self.right, self.bottom);
        let index = &mut self.index;

        self.positions.retain(|&pos| {
            if !should_remove(pos) {
                return true;
            }
            index.remove(&pos);
            if pos.x == left || pos.x == right || pos.y == top || pos.y == bottom {
                recalculate = true;
            }
            false
        });

        if recalculate {
            self.recalculate_bounds();
        }
        before - self.positions.len()
    }

    const fn on_extent(&self, pos: Point) -> bool {
        pos.x == self.left || pos.x == self.right || pos.y == self.top || pos.y == self.bottom
    }

    fn recalculate_bounds(&mut self) {
        let (mut left, mut top) = (i32::MAX, i32::MAX);
        let (mut right, mut bottom) = (i32::MIN, i32::MIN);

        for pos in &self.positions {
            left = left.min(pos.x);
            right = right.max(pos.x);
            top = top.min(pos.y);
            bottom = bottom.max(pos.y);
        }

        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
        log::trace!(
            "Recalculated region bounds over {} points: x {left}..={right}, y {top}..={bottom}",
            self.positions.len()
        );
    }
}

impl Default for SpatialRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSet for SpatialRegion {
    fn extents(&self) -> Option<(Point, Point)> {
        (self.left <= self.right).then(|| {
            (
                Point::new(self.left, self.top),
                Point::new(self.right, self.bottom),
            )
        })
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn contains_point(&self, position: Point) -> bool {
        self.contains(position)
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter()
    }
}

/// Set equality: same points regardless of insertion order
impl PartialEq for SpatialRegion {
    fn eq(&self, other: &Self) -> bool {
        same_points(self, other)
    }
}

impl Eq for SpatialRegion {}

impl fmt::Display for SpatialRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pos) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pos}")?;
        }
        write!(f, "]")
    }
}

impl Add<Point> for &SpatialRegion {
    type Output = SpatialRegion;

    fn add(self, rhs: Point) -> SpatialRegion {
        self.translated(rhs)
    }
}

impl FromIterator<Point> for SpatialRegion {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl Extend<Point> for SpatialRegion {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.add_points(iter);
    }
}

impl<'a> IntoIterator for &'a SpatialRegion {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
