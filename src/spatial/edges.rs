//! Boundary enumeration for rectangles
//!
//! The perimeter walk order is part of the public contract: it starts at the
//! visually top-left cell and proceeds clockwise as seen on screen, visiting
//! every boundary cell exactly once. "Top" is resolved through the [`YAxis`]
//! passed by the caller.

use crate::io::error::{GeometryError, Result};
use crate::spatial::orientation::{Direction, YAxis};
use crate::spatial::point::Point;
use crate::spatial::rectangle::Rectangle;

/// Straight walk along one row or column of a rectangle
#[derive(Clone, Debug)]
pub struct EdgePositions {
    next: Point,
    step: Point,
    remaining: i32,
}

impl EdgePositions {
    const fn new(start: Point, step: Point, length: i32) -> Self {
        Self {
            next: start,
            step,
            remaining: if length > 0 { length } else { 0 },
        }
    }

    const fn row(rect: &Rectangle, y: i32) -> Self {
        let length = if rect.is_empty() { 0 } else { rect.width };
        Self::new(Point::new(rect.x, y), Point::new(1, 0), length)
    }

    const fn column(rect: &Rectangle, x: i32) -> Self {
        let length = if rect.is_empty() { 0 } else { rect.height };
        Self::new(Point::new(x, rect.y), Point::new(0, 1), length)
    }
}

impl Iterator for EdgePositions {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.next += self.step;
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EdgePositions {}

/// Clockwise walk over the boundary cells of a rectangle
///
/// Segments in order: top row left to right, right column top to bottom
/// without the top corner, bottom row right to left without the right corner,
/// left column bottom to top without either corner.
#[derive(Clone, Debug)]
pub struct PerimeterPositions {
    min_x: i32,
    max_x: i32,
    top_y: i32,
    bottom_y: i32,
    // +1 when moving toward the bottom increases y
    down: i32,
    top_len: i32,
    right_len: i32,
    bottom_len: i32,
    left_len: i32,
    index: i32,
}

impl PerimeterPositions {
    fn new(rect: &Rectangle, y_axis: YAxis) -> Self {
        let (width, height) = if rect.is_empty() {
            (0, 0)
        } else {
            (rect.width, rect.height)
        };

        // One-cell-thick rectangles have no separate bottom row or left column
        let top_len = width;
        let right_len = (height - 1).max(0);
        let bottom_len = if height > 1 { width - 1 } else { 0 };
        let left_len = if width > 1 { (height - 2).max(0) } else { 0 };

        Self {
            min_x: rect.x,
            max_x: rect.max_extent_x(),
            top_y: y_axis.top(rect.y, rect.max_extent_y()),
            bottom_y: y_axis.bottom(rect.y, rect.max_extent_y()),
            down: -y_axis.up_step(),
            top_len,
            right_len,
            bottom_len,
            left_len,
            index: 0,
        }
    }

    const fn total(&self) -> i32 {
        self.top_len + self.right_len + self.bottom_len + self.left_len
    }

    const fn point_at(&self, index: i32) -> Option<Point> {
        let mut i = index;
        if i < self.top_len {
            return Some(Point::new(self.min_x + i, self.top_y));
        }
        i -= self.top_len;
        if i < self.right_len {
            return Some(Point::new(self.max_x, self.top_y + self.down * (i + 1)));
        }
        i -= self.right_len;
        if i < self.bottom_len {
            return Some(Point::new(self.max_x - 1 - i, self.bottom_y));
        }
        i -= self.bottom_len;
        if i < self.left_len {
            return Some(Point::new(self.min_x, self.bottom_y - self.down * (i + 1)));
        }
        None
    }
}

impl Iterator for PerimeterPositions {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let point = self.point_at(self.index)?;
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total() - self.index).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PerimeterPositions {}

impl Rectangle {
    /// Every boundary cell, clockwise from the visually top-left corner
    pub fn perimeter_positions(&self, y_axis: YAxis) -> PerimeterPositions {
        PerimeterPositions::new(self, y_axis)
    }

    /// Visually top row, left to right
    pub const fn top_edge_positions(&self, y_axis: YAxis) -> EdgePositions {
        EdgePositions::row(self, y_axis.top(self.y, self.max_extent_y()))
    }

    /// Visually bottom row, left to right
    pub const fn bottom_edge_positions(&self, y_axis: YAxis) -> EdgePositions {
        EdgePositions::row(self, y_axis.bottom(self.y, self.max_extent_y()))
    }

    /// Leftmost column, by increasing y
    pub const fn left_edge_positions(&self) -> EdgePositions {
        self.min_x_positions()
    }

    /// Rightmost column, by increasing y
    pub const fn right_edge_positions(&self) -> EdgePositions {
        self.max_x_positions()
    }

    /// Row at the minimum y, by increasing x
    pub const fn min_y_positions(&self) -> EdgePositions {
        EdgePositions::row(self, self.y)
    }

    /// Row at the maximum y, by increasing x
    pub const fn max_y_positions(&self) -> EdgePositions {
        EdgePositions::row(self, self.max_extent_y())
    }

    /// Column at the minimum x, by increasing y
    pub const fn min_x_positions(&self) -> EdgePositions {
        EdgePositions::column(self, self.x)
    }

    /// Column at the maximum x, by increasing y
    pub const fn max_x_positions(&self) -> EdgePositions {
        EdgePositions::column(self, self.max_extent_x())
    }

    /// Cells along the given side of the rectangle
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonCardinalSide`] for diagonal directions and
    /// [`Direction::None`].
    pub fn positions_on_side(&self, side: Direction, y_axis: YAxis) -> Result<EdgePositions> {
        match side {
            Direction::Up => Ok(self.top_edge_positions(y_axis)),
            Direction::Right => Ok(self.max_x_positions()),
            Direction::Down => Ok(self.bottom_edge_positions(y_axis)),
            Direction::Left => Ok(self.min_x_positions()),
            direction => Err(GeometryError::NonCardinalSide { direction }),
        }
    }

    /// Whether the point lies on the visually top row
    pub const fn is_on_top_edge(&self, point: Point, y_axis: YAxis) -> bool {
        self.spans_x(point.x) && point.y == y_axis.top(self.y, self.max_extent_y())
    }

    /// Whether the point lies on the visually bottom row
    pub const fn is_on_bottom_edge(&self, point: Point, y_axis: YAxis) -> bool {
        self.spans_x(point.x) && point.y == y_axis.bottom(self.y, self.max_extent_y())
    }

    /// Whether the point lies on the leftmost column
    pub const fn is_on_left_edge(&self, point: Point) -> bool {
        self.spans_y(point.y) && point.x == self.x
    }

    /// Whether the point lies on the rightmost column
    pub const fn is_on_right_edge(&self, point: Point) -> bool {
        self.spans_y(point.y) && point.x == self.max_extent_x()
    }

    const fn spans_x(&self, x: i32) -> bool {
        x >= self.x && x <= self.max_extent_x()
    }

    const fn spans_y(&self, y: i32) -> bool {
        y >= self.y && y <= self.max_extent_y()
    }
}
