//! Dense bit-per-cell point sets over a fixed frame rectangle

use bitvec::prelude::*;

use crate::algorithm::algebra::same_points;
use crate::spatial::point::Point;
use crate::spatial::point_set::PointSet;
use crate::spatial::rectangle::Rectangle;
use crate::spatial::region::SpatialRegion;

/// Fixed-frame bitset of grid points
///
/// One bit per cell of the frame, row-major from the frame's minimum extent.
/// Points outside the frame can never be members; inserting them is ignored.
/// Combining two masks with identical frames runs word-parallel. Equality
/// compares the points held, not the frames.
#[derive(Clone, Debug)]
pub struct RegionMask {
    frame: Rectangle,
    bits: BitVec,
}

impl RegionMask {
    /// Create a mask with no points set
    pub fn new(frame: Rectangle) -> Self {
        Self {
            frame,
            bits: bitvec![0; frame.count()],
        }
    }

    /// Create a mask with every cell of the frame set
    pub fn filled(frame: Rectangle) -> Self {
        Self {
            frame,
            bits: bitvec![1; frame.count()],
        }
    }

    /// Create a mask framed by the set's bounds and holding exactly its points
    pub fn from_set(set: &impl PointSet) -> Self {
        let mut mask = Self::new(set.bounds());
        for pos in set.points() {
            mask.insert(pos);
        }
        mask
    }

    /// Create a mask from points, ignoring those outside the frame
    pub fn from_points(frame: Rectangle, points: impl IntoIterator<Item = Point>) -> Self {
        let mut mask = Self::new(frame);
        for pos in points {
            mask.insert(pos);
        }
        mask
    }

    /// Rectangle of cells this mask can represent
    pub const fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Set a cell, returning whether it was newly added
    ///
    /// Returns false for points already present or outside the frame.
    pub fn insert(&mut self, position: Point) -> bool {
        let Some(slot) = self.slot(position) else {
            return false;
        };
        if self.bits.get(slot).as_deref() == Some(&true) {
            return false;
        }
        self.bits.set(slot, true);
        true
    }

    /// Clear a cell, returning whether it was present
    pub fn remove(&mut self, position: Point) -> bool {
        let Some(slot) = self.slot(position) else {
            return false;
        };
        if self.bits.get(slot).as_deref() != Some(&true) {
            return false;
        }
        self.bits.set(slot, false);
        true
    }

    /// O(1) membership test
    pub fn contains(&self, position: Point) -> bool {
        self.slot(position)
            .is_some_and(|slot| self.bits.get(slot).as_deref() == Some(&true))
    }

    /// Number of points set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether no points are set
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Points in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.bits.iter_ones().map(|slot| self.point_at(slot))
    }

    /// Sparse copy of the set points, in row-major order
    pub fn to_region(&self) -> SpatialRegion {
        self.iter().collect()
    }

    /// Add every point of `other` that falls inside the frame
    pub fn union_with(&mut self, other: &impl PointSet) {
        for pos in other.points() {
            self.insert(pos);
        }
    }

    /// Keep only points also present in `other`
    pub fn intersect_with(&mut self, other: &impl PointSet) {
        let dropped: Vec<usize> = self
            .bits
            .iter_ones()
            .filter(|&slot| !other.contains_point(self.point_at(slot)))
            .collect();
        for slot in dropped {
            self.bits.set(slot, false);
        }
    }

    /// Clear every point present in `other`
    pub fn subtract(&mut self, other: &impl PointSet) {
        for pos in other.points() {
            self.remove(pos);
        }
    }

    /// [`RegionMask::union_with`], word-parallel when the frames match
    pub fn union_mask(&mut self, other: &Self) {
        if self.frame == other.frame {
            self.bits |= &other.bits;
        } else {
            self.union_with(other);
        }
    }

    /// [`RegionMask::intersect_with`], word-parallel when the frames match
    pub fn intersect_mask(&mut self, other: &Self) {
        if self.frame == other.frame {
            self.bits &= &other.bits;
        } else {
            self.intersect_with(other);
        }
    }

    /// [`RegionMask::subtract`], word-parallel when the frames match
    pub fn subtract_mask(&mut self, other: &Self) {
        if self.frame == other.frame {
            let kept = !other.bits.clone();
            self.bits &= &kept;
        } else {
            self.subtract(other);
        }
    }

    fn slot(&self, position: Point) -> Option<usize> {
        if !self.frame.contains(position) {
            return None;
        }
        let column = (position.x - self.frame.x) as usize;
        let row = (position.y - self.frame.y) as usize;
        Some(row * self.frame.width as usize + column)
    }

    const fn point_at(&self, slot: usize) -> Point {
        let width = self.frame.width as usize;
        Point::new(
            self.frame.x + (slot % width) as i32,
            self.frame.y + (slot / width) as i32,
        )
    }
}

impl PointSet for RegionMask {
    fn extents(&self) -> Option<(Point, Point)> {
        let mut points = self.iter();
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), pos| {
            (
                Point::new(min.x.min(pos.x), min.y.min(pos.y)),
                Point::new(max.x.max(pos.x), max.y.max(pos.y)),
            )
        }))
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

impl PartialEq for RegionMask {
    fn eq(&self, other: &Self) -> bool {
        same_points(self, other)
    }
}

impl Eq for RegionMask {}
