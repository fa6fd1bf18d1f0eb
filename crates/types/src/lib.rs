//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond small conversions, making
//! them usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The default playfield comes from a 600x600 pixel board split into 25 pixel
//! cells:
//!
//! - **Width**: 24 columns (indexed 0-23)
//! - **Height**: 24 rows (indexed 0-23)
//! - **Start**: head at (5, 5), moving right
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed tick period (10 moves per second) |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Tile, GRID_WIDTH, GRID_HEIGHT};
//!
//! let head = Tile::new(5, 5);
//! assert_eq!(head.offset(Direction::Right.delta()), Tile::new(6, 5));
//!
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! let action = GameAction::Turn(Direction::Left);
//! assert_eq!(action.direction(), Direction::Left);
//!
//! assert_eq!(GRID_WIDTH, 24);
//! assert_eq!(GRID_HEIGHT, 24);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in pixels of the classic window.
pub const BOARD_WIDTH_PX: u32 = 600;

/// Board height in pixels of the classic window.
pub const BOARD_HEIGHT_PX: u32 = 600;

/// Size of one tile in pixels.
pub const CELL_SIZE_PX: u32 = 25;

/// Grid width in tiles (600 / 25)
pub const GRID_WIDTH: u32 = BOARD_WIDTH_PX / CELL_SIZE_PX;

/// Grid height in tiles (600 / 25)
pub const GRID_HEIGHT: u32 = BOARD_HEIGHT_PX / CELL_SIZE_PX;

/// Largest grid side: every tile coordinate, plus one step past the edge,
/// must fit in an `i32`.
pub const MAX_GRID_SIDE: u32 = i32::MAX as u32;

/// Fixed tick interval in milliseconds (100ms = 10 ticks per second)
pub const TICK_MS: u32 = 100;

/// Where the head starts.
pub const INITIAL_HEAD: Tile = Tile { x: 5, y: 5 };

/// Nominal first food tile. Construction re-rolls it right away.
pub const INITIAL_FOOD: Tile = Tile { x: 10, y: 10 };


/// One grid cell coordinate, measured in tiles (not pixels).
///
/// Coordinates are signed so a head that has just left the grid can still be
/// represented (that is how wall collisions are detected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile shifted by a velocity. Saturates at the `i32` range.
    pub fn offset(self, (dx, dy): Velocity) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Whether the tile lies in `[0, width) x [0, height)`.
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }
}

/// A unit movement vector `(dx, dy)`.
///
/// Only the four axis-aligned unit vectors are ever produced by [`Direction::delta`].
pub type Velocity = (i32, i32);

/// The four directions the snake can travel in.
///
/// Screen coordinates: `y` grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit velocity for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Down.delta(), (0, 1));
    /// assert_eq!(Direction::Left.delta(), (-1, 0));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(self) -> Velocity {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Inverse of [`Direction::delta`]. Returns `None` for anything that is not
    /// a unit axis vector.
    pub fn from_delta(v: Velocity) -> Option<Self> {
        match v {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Steer the snake. Reversals into the neck are dropped by the game.
    Turn(Direction),
}

impl GameAction {
    pub fn direction(&self) -> Direction {
        match self {
            GameAction::Turn(d) => *d,
        }
    }
}
