//! Game configuration and startup validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Tile, MAX_GRID_SIDE, CELL_SIZE_PX, GRID_HEIGHT, GRID_WIDTH, INITIAL_FOOD, INITIAL_HEAD, TICK_MS};

/// Reasons a configuration cannot start a game.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1 tiles, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },
    #[error("grid {width}x{height} exceeds the {max} tile limit per side")]
    GridTooLarge { width: u32, height: u32, max: u32 },
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
    #[error("initial head {head:?} lies outside the {width}x{height} grid")]
    HeadOutOfBounds { head: Tile, width: u32, height: u32 },
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything needed to start a game.
///
/// Unknown fields in a config file are rejected; missing fields take the
/// classic 24x24 / 100ms defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Grid width in tiles.
    pub grid_width: u32,
    /// Grid height in tiles.
    pub grid_height: u32,
    /// Display-only: pixels per tile in the classic window. The terminal view
    /// uses its own character cell size.
    pub cell_size: u32,
    /// Tick period in milliseconds.
    pub tick_interval_ms: u32,
    pub initial_head: Tile,
    /// Overwritten by the first food placement during construction.
    pub initial_food: Tile,
    /// RNG seed. `None` lets the host pick one.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: CELL_SIZE_PX,
            tick_interval_ms: TICK_MS,
            initial_head: INITIAL_HEAD,
            initial_food: INITIAL_FOOD,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size.
    pub fn new(grid_width: u32, grid_height: u32) -> Self {
        Self {
            grid_width,
            grid_height,
            ..Default::default()
        }
    }

    /// Derive the grid from a pixel board, the way the classic window does
    /// (`board / cell`, rounding down).
    pub fn from_board(board_width_px: u32, board_height_px: u32, cell_size: u32) -> Self {
        let (grid_width, grid_height) = if cell_size == 0 {
            (0, 0)
        } else {
            (board_width_px / cell_size, board_height_px / cell_size)
        };
        Self {
            grid_width,
            grid_height,
            cell_size,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_initial_head(mut self, head: Tile) -> Self {
        self.initial_head = head;
        self
    }

    pub fn with_tick_interval_ms(mut self, ms: u32) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reject configurations that cannot produce a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: MAX_GRID_SIDE,
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if !self.initial_head.in_bounds(self.grid_width, self.grid_height) {
            return Err(ConfigError::HeadOutOfBounds {
                head: self.initial_head,
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        Ok(())
    }
}
