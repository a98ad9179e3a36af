//! Vertical axis orientation and compass directions
//!
//! Whether "up" means decreasing or increasing y is a property of the caller's
//! coordinate system, so every orientation-dependent operation takes a [`YAxis`]
//! argument instead of consulting shared state.

use crate::io::configuration::DEFAULT_Y_AXIS;
use crate::spatial::point::Point;

/// Direction in which y grows on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YAxis {
    /// Y increases downward, as in array and screen coordinates
    Downward,
    /// Y increases upward, as in mathematical coordinates
    Upward,
}

impl YAxis {
    /// Y coordinate of the visually top row of a span `[min_y, max_y]`
    pub const fn top(self, min_y: i32, max_y: i32) -> i32 {
        match self {
            Self::Downward => min_y,
            Self::Upward => max_y,
        }
    }

    /// Y coordinate of the visually bottom row of a span `[min_y, max_y]`
    pub const fn bottom(self, min_y: i32, max_y: i32) -> i32 {
        match self {
            Self::Downward => max_y,
            Self::Upward => min_y,
        }
    }

    /// Change in y for one step toward the top of the screen
    pub const fn up_step(self) -> i32 {
        match self {
            Self::Downward => -1,
            Self::Upward => 1,
        }
    }
}

impl Default for YAxis {
    fn default() -> Self {
        DEFAULT_Y_AXIS
    }
}

/// Compass direction, including the absence of a direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No direction
    None,
    /// Toward the top of the screen
    Up,
    /// Up and right
    UpRight,
    /// Toward increasing x
    Right,
    /// Down and right
    DownRight,
    /// Toward the bottom of the screen
    Down,
    /// Down and left
    DownLeft,
    /// Toward decreasing x
    Left,
    /// Up and left
    UpLeft,
}

impl Direction {
    /// The four axis directions, clockwise from up
    pub const CARDINALS: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Whether this is one of the four axis directions
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::Up | Self::Right | Self::Down | Self::Left)
    }

    /// Unit displacement for one step in this direction
    pub const fn delta(self, y_axis: YAxis) -> Point {
        let up = y_axis.up_step();
        match self {
            Self::None => Point::new(0, 0),
            Self::Up => Point::new(0, up),
            Self::UpRight => Point::new(1, up),
            Self::Right => Point::new(1, 0),
            Self::DownRight => Point::new(1, -up),
            Self::Down => Point::new(0, -up),
            Self::DownLeft => Point::new(-1, -up),
            Self::Left => Point::new(-1, 0),
            Self::UpLeft => Point::new(-1, up),
        }
    }
}
