//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, the state machine, and the drawable
//! snapshot. It has **no dependencies** on terminals, timers, or logging,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical games (food placement included)
//! - **Testable**: Any position can be built with [`GameState::from_parts`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`config`]: Grid size, tick period, start position, and startup validation
//! - [`game_state`]: The state machine (`set_direction`, `tick`, `place_food`)
//! - [`rng`]: Seeded LCG used for food placement
//! - [`snapshot`]: Immutable drawable view of a position
//!
//! # Game Rules
//!
//! - The snake moves one tile per tick in its current direction
//! - Turning straight back into the neck is ignored
//! - Reaching the food grows the snake by one segment and re-rolls the food
//! - Leaving the grid or hitting the body ends the game for good
//! - The score is the body length
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_types::{Direction, Tile};
//!
//! let config = GameConfig::new(10, 10).with_seed(12345);
//! let mut game = GameState::try_new(config).unwrap();
//!
//! game.set_direction(Direction::Down);
//! game.tick();
//!
//! assert_eq!(game.head(), Tile::new(5, 6));
//! assert_eq!(game.snapshot().display_text(), "Score: 0");
//! ```
//!
//! # Timing
//!
//! The core has no clock. Call [`GameState::tick`] once per period
//! (`GameConfig::tick_interval_ms`, 100ms by default).

pub mod config;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use game_state::{step, Collision, GameState, GameStatus, TickOutcome, DEFAULT_SEED};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
