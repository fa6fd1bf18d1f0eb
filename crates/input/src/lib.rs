//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Turns are
//! applied on press; the game itself drops reversals, so no filtering happens
//! here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
