//! Per-cell coverage counting for checking exact tilings

use ndarray::{Array2, Axis, Slice};

use crate::io::error::{GeometryError, Result};
use crate::spatial::point::Point;
use crate::spatial::point_set::PointSet;
use crate::spatial::rectangle::Rectangle;
use crate::spatial::region::SpatialRegion;

/// How many recorded tiles cover each cell of a target rectangle
///
/// Counts are stored row-major (`[row, column]`) relative to the target's
/// minimum extent. Tile cells outside the target are tallied separately.
#[derive(Clone, Debug)]
pub struct CoverageMap {
    target: Rectangle,
    counts: Array2<u32>,
    outside: usize,
}

impl CoverageMap {
    /// Create a map with no coverage recorded
    pub fn new(target: Rectangle) -> Self {
        let (rows, cols) = if target.is_empty() {
            (0, 0)
        } else {
            (target.height as usize, target.width as usize)
        };

        Self {
            target,
            counts: Array2::zeros((rows, cols)),
            outside: 0,
        }
    }

    /// Create a map and record every tile
    pub fn from_tiles<'a>(target: Rectangle, tiles: impl IntoIterator<Item = &'a Rectangle>) -> Self {
        let mut map = Self::new(target);
        for tile in tiles {
            map.record(tile);
        }
        map
    }

    /// Rectangle whose cells are being counted
    pub const fn target(&self) -> Rectangle {
        self.target
    }

    /// Add one to every target cell the tile covers
    pub fn record(&mut self, tile: &Rectangle) {
        let clipped = Rectangle::get_intersection(&self.target, tile);
        self.outside += tile.count() - clipped.count();
        if clipped.is_empty() {
            return;
        }

        let row_start = (clipped.y - self.target.y) as usize;
        let col_start = (clipped.x - self.target.x) as usize;
        let row_end = row_start + clipped.height as usize;
        let col_end = col_start + clipped.width as usize;
        let mut covered = self.counts.view_mut();
        covered.slice_axis_inplace(Axis(0), Slice::from(row_start..row_end));
        covered.slice_axis_inplace(Axis(1), Slice::from(col_start..col_end));
        covered.mapv_inplace(|count| count + 1);
    }

    /// Number of tiles covering a point, or `None` outside the target
    pub fn count_at(&self, position: Point) -> Option<u32> {
        if !self.target.contains(position) {
            return None;
        }
        let row = (position.y - self.target.y) as usize;
        let col = (position.x - self.target.x) as usize;
        self.counts.get([row, col]).copied()
    }

    /// Target cells covered by no tile
    pub fn uncovered(&self) -> SpatialRegion {
        self.cells_where(|count| count == 0)
    }

    /// Target cells covered by more than one tile
    pub fn overlapping(&self) -> SpatialRegion {
        self.cells_where(|count| count > 1)
    }

    /// Tile cells recorded outside the target
    pub const fn outside(&self) -> usize {
        self.outside
    }

    /// Whether every target cell is covered exactly once and nothing spills outside
    pub fn is_exact(&self) -> bool {
        self.outside == 0 && self.counts.iter().all(|&count| count == 1)
    }

    fn cells_where(&self, predicate: impl Fn(u32) -> bool) -> SpatialRegion {
        self.counts
            .indexed_iter()
            .filter(|&(_, &count)| predicate(count))
            .map(|((row, col), _)| {
                Point::new(self.target.x + col as i32, self.target.y + row as i32)
            })
            .collect()
    }
}

/// Check that `tiles` cover `original` exactly once with nothing outside
///
/// # Errors
///
/// Returns [`GeometryError::InexactTiling`] describing the gaps, overlaps and
/// spill when the tiling is not exact.
pub fn verify_tiling(original: &Rectangle, tiles: &[Rectangle]) -> Result<()> {
    let map = CoverageMap::from_tiles(*original, tiles);
    if map.is_exact() {
        return Ok(());
    }

    Err(GeometryError::InexactTiling {
        uncovered: map.uncovered().len(),
        overlapping: map.overlapping().len(),
        outside: map.outside(),
    })
}
