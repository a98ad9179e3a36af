//! Axis-aligned integer rectangles with half-open membership semantics
//!
//! A rectangle is stored as position plus size. The position is the minimum
//! extent, so a rectangle of size (w, h) covers the half-open span
//! `[x, x + w) × [y, y + h)` and contains exactly `w * h` points. Rectangles
//! with a zero or negative dimension are empty and contain nothing.

use std::fmt;

use crate::spatial::orientation::{Direction, YAxis};
use crate::spatial::point::Point;

/// Axis-aligned rectangle defined by its minimum extent and size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// Minimum x coordinate inside the rectangle
    pub x: i32,
    /// Minimum y coordinate inside the rectangle
    pub y: i32,
    /// Number of columns covered
    pub width: i32,
    /// Number of rows covered
    pub height: i32,
}

impl Rectangle {
    /// The canonical empty rectangle, at the origin with zero size
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Create a rectangle from its minimum extent and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from inclusive minimum and maximum extents
    pub const fn with_extents(min_extent: Point, max_extent: Point) -> Self {
        Self::new(
            min_extent.x,
            min_extent.y,
            max_extent.x - min_extent.x + 1,
            max_extent.y - min_extent.y + 1,
        )
    }

    /// Create a rectangle spanning `radius` cells on each side of a center cell
    ///
    /// The result always has odd dimensions `2 * radius + 1`.
    pub const fn with_radius(center: Point, horizontal_radius: i32, vertical_radius: i32) -> Self {
        Self::new(
            center.x - horizontal_radius,
            center.y - vertical_radius,
            2 * horizontal_radius + 1,
            2 * vertical_radius + 1,
        )
    }

    /// Create a rectangle from a position and a size vector
    pub const fn with_position_and_size(position: Point, size: Point) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Number of points covered, negative dimensions included as given
    pub const fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Center cell, rounding toward the minimum extent for even sizes
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Whether the rectangle contains no points
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Minimum extent (the position)
    pub const fn min_extent(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Inclusive maximum extent
    pub const fn max_extent(&self) -> Point {
        Point::new(self.max_extent_x(), self.max_extent_y())
    }

    /// Inclusive maximum x coordinate
    pub const fn max_extent_x(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Inclusive maximum y coordinate
    pub const fn max_extent_y(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Position of the minimum extent
    pub const fn position(&self) -> Point {
        self.min_extent()
    }

    /// Size as a (width, height) vector
    pub const fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Half-open point membership
    pub const fn contains(&self, position: Point) -> bool {
        position.x >= self.x
            && position.x < self.x + self.width
            && position.y >= self.y
            && position.y < self.y + self.height
    }

    /// Whether `other` lies entirely within this rectangle's extents
    pub const fn contains_rect(&self, other: &Self) -> bool {
        self.x <= other.x
            && other.x + other.width <= self.x + self.width
            && self.y <= other.y
            && other.y + other.height <= self.y + self.height
    }

    /// Whether the two rectangles share at least one point
    ///
    /// Rectangles touching only along a boundary line do not intersect, and an
    /// empty rectangle intersects nothing, so this agrees with
    /// [`Rectangle::get_intersection`] being non-empty.
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.x < self.x + self.width
            && self.x < other.x + other.width
            && other.y < self.y + self.height
            && self.y < other.y + other.height
    }

    /// Overlapping rectangle of `r1` and `r2`, or [`Rectangle::EMPTY`] when they do not intersect
    pub fn get_intersection(r1: &Self, r2: &Self) -> Self {
        if !r1.intersects(r2) {
            return Self::EMPTY;
        }

        let min_x = r1.x.max(r2.x);
        let min_y = r1.y.max(r2.y);
        let exclusive_max_x = (r1.x + r1.width).min(r2.x + r2.width);
        let exclusive_max_y = (r1.y + r1.height).min(r2.y + r2.height);
        Self::new(min_x, min_y, exclusive_max_x - min_x, exclusive_max_y - min_y)
    }

    /// Smallest rectangle covering both inputs
    ///
    /// This is a bounding box and may cover points in neither input. Empty
    /// operands cover nothing and are ignored.
    pub fn get_union(r1: &Self, r2: &Self) -> Self {
        match (r1.is_empty(), r2.is_empty()) {
            (true, true) => Self::EMPTY,
            (true, false) => *r2,
            (false, true) => *r1,
            (false, false) => {
                let x = r1.x.min(r2.x);
                let y = r1.y.min(r2.y);
                let exclusive_max_x = (r1.x + r1.width).max(r2.x + r2.width);
                let exclusive_max_y = (r1.y + r1.height).max(r2.y + r2.height);
                Self::new(x, y, exclusive_max_x - x, exclusive_max_y - y)
            }
        }
    }

    /// Every point in the rectangle, row by row from the minimum extent
    pub const fn positions(&self) -> Positions {
        Positions::new(*self)
    }

    /// Same size, moved so its minimum extent is `position`
    #[must_use]
    pub const fn with_position(&self, position: Point) -> Self {
        Self::new(position.x, position.y, self.width, self.height)
    }

    /// Same size and y, different x
    #[must_use]
    pub const fn with_x(&self, x: i32) -> Self {
        Self::new(x, self.y, self.width, self.height)
    }

    /// Same size and x, different y
    #[must_use]
    pub const fn with_y(&self, y: i32) -> Self {
        Self::new(self.x, y, self.width, self.height)
    }

    /// Same position and height, different width
    #[must_use]
    pub const fn with_width(&self, width: i32) -> Self {
        Self::new(self.x, self.y, width, self.height)
    }

    /// Same position and width, different height
    #[must_use]
    pub const fn with_height(&self, height: i32) -> Self {
        Self::new(self.x, self.y, self.width, height)
    }

    /// Same position, different size
    #[must_use]
    pub const fn with_size(&self, width: i32, height: i32) -> Self {
        Self::new(self.x, self.y, width, height)
    }

    /// Same size, moved so that [`Rectangle::center`] becomes `center`
    #[must_use]
    pub const fn with_center(&self, center: Point) -> Self {
        Self::new(
            center.x - self.width / 2,
            center.y - self.height / 2,
            self.width,
            self.height,
        )
    }

    /// Keep the maximum extent, replace the minimum extent
    #[must_use]
    pub const fn with_min_extent(&self, min_extent: Point) -> Self {
        Self::with_extents(min_extent, self.max_extent())
    }

    /// Keep the maximum extent, replace the minimum x
    #[must_use]
    pub const fn with_min_extent_x(&self, x: i32) -> Self {
        Self::with_extents(Point::new(x, self.y), self.max_extent())
    }

    /// Keep the maximum extent, replace the minimum y
    #[must_use]
    pub const fn with_min_extent_y(&self, y: i32) -> Self {
        Self::with_extents(Point::new(self.x, y), self.max_extent())
    }

    /// Keep the minimum extent, replace the maximum extent
    #[must_use]
    pub const fn with_max_extent(&self, max_extent: Point) -> Self {
        Self::with_extents(self.min_extent(), max_extent)
    }

    /// Keep the minimum extent, replace the maximum x
    #[must_use]
    pub const fn with_max_extent_x(&self, x: i32) -> Self {
        Self::with_extents(self.min_extent(), Point::new(x, self.max_extent_y()))
    }

    /// Keep the minimum extent, replace the maximum y
    #[must_use]
    pub const fn with_max_extent_y(&self, y: i32) -> Self {
        Self::with_extents(self.min_extent(), Point::new(self.max_extent_x(), y))
    }

    /// Grow (or shrink, for negative deltas) the width
    #[must_use]
    pub const fn change_width(&self, delta_width: i32) -> Self {
        self.with_width(self.width + delta_width)
    }

    /// Grow (or shrink, for negative deltas) the height
    #[must_use]
    pub const fn change_height(&self, delta_height: i32) -> Self {
        self.with_height(self.height + delta_height)
    }

    /// Grow both dimensions by a size vector
    #[must_use]
    pub const fn change_size(&self, delta: Point) -> Self {
        self.with_size(self.width + delta.x, self.height + delta.y)
    }

    /// Grow on every side, keeping the same center
    #[must_use]
    pub const fn expand(&self, horizontal_change: i32, vertical_change: i32) -> Self {
        Self::new(
            self.x - horizontal_change,
            self.y - vertical_change,
            self.width + 2 * horizontal_change,
            self.height + 2 * vertical_change,
        )
    }

    /// Move by a displacement vector
    #[must_use]
    pub const fn translate(&self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Move horizontally
    #[must_use]
    pub const fn translate_x(&self, dx: i32) -> Self {
        self.with_x(self.x + dx)
    }

    /// Move vertically
    #[must_use]
    pub const fn translate_y(&self, dy: i32) -> Self {
        self.with_y(self.y + dy)
    }

    /// Move one step in a compass direction
    #[must_use]
    pub const fn translate_direction(&self, direction: Direction, y_axis: YAxis) -> Self {
        self.translate(direction.delta(y_axis))
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.min_extent(), self.max_extent())
    }
}

/// Row-major walk over every point of a rectangle
///
/// A clone continues from the same point. Call [`Rectangle::positions`] again
/// for a fresh walk.
#[derive(Clone, Debug)]
pub struct Positions {
    min_x: i32,
    max_x: i32,
    max_y: i32,
    next: Option<Point>,
}

impl Positions {
    const fn new(rect: Rectangle) -> Self {
        let next = if rect.is_empty() {
            None
        } else {
            Some(rect.min_extent())
        };

        Self {
            min_x: rect.x,
            max_x: rect.max_extent_x(),
            max_y: rect.max_extent_y(),
            next,
        }
    }
}

impl Iterator for Positions {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next?;
        self.next = if current.x < self.max_x {
            Some(current.with_x(current.x + 1))
        } else if current.y < self.max_y {
            Some(Point::new(self.min_x, current.y + 1))
        } else {
            None
        };
        Some(current)
    }
}
