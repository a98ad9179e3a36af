//! Exact rectangular tilings by random bisection and recursive quartering
//!
//! Every operation here produces pairwise disjoint rectangles whose union is
//! exactly the input rectangle. Split offsets are drawn from the partitioner's
//! own random source, so a fixed seed reproduces a tiling exactly.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::MINIMUM_BISECTION_EXTENT;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::rectangle::Rectangle;

/// Parameters controlling bisection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionConfig {
    /// Smallest extent either half of a bisection may have along the split axis
    pub minimum_bisection_extent: i32,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            minimum_bisection_extent: MINIMUM_BISECTION_EXTENT,
        }
    }
}

/// Splits rectangles into exact tilings using an injected random source
#[derive(Debug)]
pub struct RectanglePartitioner<R> {
    rng: R,
    config: PartitionConfig,
}

impl RectanglePartitioner<StdRng> {
    /// Create a deterministic partitioner
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RectanglePartitioner<R> {
    /// Create a partitioner with the default configuration
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, PartitionConfig::default())
    }

    /// Create a partitioner with an explicit configuration
    pub const fn with_config(rng: R, config: PartitionConfig) -> Self {
        Self { rng, config }
    }

    /// Active configuration
    pub const fn config(&self) -> PartitionConfig {
        self.config
    }

    /// Recover the random source, for example to continue a seeded sequence elsewhere
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Split into a top and a bottom rectangle, each full width
    ///
    /// The cut row is drawn uniformly so both heights are at least the minimum
    /// bisection extent.
    ///
    /// # Errors
    ///
    /// Returns an error if the height is less than twice the minimum bisection
    /// extent, or the configured extent is below 1.
    pub fn divide_horizontally(&mut self, rect: &Rectangle) -> Result<[Rectangle; 2]> {
        let offset = self.bisection_offset(rect, "height", rect.height)?;
        Ok(split_rows(rect, offset))
    }

    /// Split into a left and a right rectangle, each full height
    ///
    /// # Errors
    ///
    /// Returns an error if the width is less than twice the minimum bisection
    /// extent, or the configured extent is below 1.
    pub fn divide_vertically(&mut self, rect: &Rectangle) -> Result<[Rectangle; 2]> {
        let offset = self.bisection_offset(rect, "width", rect.width)?;
        Ok(split_columns(rect, offset))
    }

    /// Split across the longer axis, side by side for squares
    ///
    /// # Errors
    ///
    /// Returns an error if the longer extent is less than twice the minimum
    /// bisection extent.
    pub fn divide_in_half(&mut self, rect: &Rectangle) -> Result<[Rectangle; 2]> {
        if rect.height > rect.width {
            self.divide_horizontally(rect)
        } else {
            self.divide_vertically(rect)
        }
    }

    /// Recursively split until every leaf has both extents at most `2 * minimum_size`
    ///
    /// An extent above the threshold is cut at an offset drawn from
    /// `[minimum_size, extent - minimum_size]`. When both extents exceed it the
    /// node splits into quadrants, otherwise into two. Leaves are returned
    /// depth-first: top-left, top-right, bottom-left, bottom-right in array
    /// coordinates. A rectangle already within the threshold comes back alone.
    ///
    /// # Errors
    ///
    /// Returns an error if `minimum_size` is below 1 or doubling it overflows.
    pub fn divide(&mut self, rect: &Rectangle, minimum_size: i32) -> Result<Vec<Rectangle>> {
        if minimum_size < 1 {
            return Err(invalid_parameter(
                "minimum_size",
                &minimum_size,
                &"must be at least 1",
            ));
        }
        let threshold = minimum_size.checked_mul(2).ok_or_else(|| {
            invalid_parameter("minimum_size", &minimum_size, &"doubled size overflows")
        })?;

        let mut leaves = Vec::new();
        self.divide_into(*rect, minimum_size, threshold, &mut leaves);
        log::debug!(
            "Divided {rect} into {} leaves with minimum size {minimum_size}",
            leaves.len()
        );
        Ok(leaves)
    }

    fn divide_into(
        &mut self,
        rect: Rectangle,
        minimum_size: i32,
        threshold: i32,
        leaves: &mut Vec<Rectangle>,
    ) {
        let split_columns_needed = rect.width > threshold;
        let split_rows_needed = rect.height > threshold;

        match (split_columns_needed, split_rows_needed) {
            (false, false) => leaves.push(rect),
            (true, false) => {
                let column = self.draw_offset(minimum_size, rect.width);
                log::trace!("Splitting {rect} at column offset {column}");
                for child in split_columns(&rect, column) {
                    self.divide_into(child, minimum_size, threshold, leaves);
                }
            }
            (false, true) => {
                let row = self.draw_offset(minimum_size, rect.height);
                log::trace!("Splitting {rect} at row offset {row}");
                for child in split_rows(&rect, row) {
                    self.divide_into(child, minimum_size, threshold, leaves);
                }
            }
            (true, true) => {
                let column = self.draw_offset(minimum_size, rect.width);
                let row = self.draw_offset(minimum_size, rect.height);
                log::trace!("Quartering {rect} at offsets ({column}, {row})");
                let [top, bottom] = split_rows(&rect, row);
                let [top_left, top_right] = split_columns(&top, column);
                let [bottom_left, bottom_right] = split_columns(&bottom, column);
                for child in [top_left, top_right, bottom_left, bottom_right] {
                    self.divide_into(child, minimum_size, threshold, leaves);
                }
            }
        }
    }

    fn bisection_offset(&mut self, rect: &Rectangle, axis: &str, length: i32) -> Result<i32> {
        let minimum = self.config.minimum_bisection_extent;
        if minimum < 1 {
            return Err(invalid_parameter(
                "minimum_bisection_extent",
                &minimum,
                &"must be at least 1",
            ));
        }
        if length < minimum.saturating_mul(2) {
            return Err(invalid_parameter(
                "rectangle",
                rect,
                &format!("{axis} {length} is shorter than twice the minimum extent {minimum}"),
            ));
        }
        Ok(self.draw_offset(minimum, length))
    }

    // Caller guarantees length >= 2 * minimum
    fn draw_offset(&mut self, minimum: i32, length: i32) -> i32 {
        self.rng.random_range(minimum..=length - minimum)
    }
}

/// Cut into rows `[0, offset)` and `[offset, height)` relative to the rectangle
const fn split_rows(rect: &Rectangle, offset: i32) -> [Rectangle; 2] {
    [
        rect.with_height(offset),
        Rectangle::new(rect.x, rect.y + offset, rect.width, rect.height - offset),
    ]
}

/// Cut into columns `[0, offset)` and `[offset, width)` relative to the rectangle
const fn split_columns(rect: &Rectangle, offset: i32) -> [Rectangle; 2] {
    [
        rect.with_width(offset),
        Rectangle::new(rect.x + offset, rect.y, rect.width - offset, rect.height),
    ]
}
