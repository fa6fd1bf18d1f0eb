//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is then flushed to the
//! terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map grid tiles to fixed-size blocks of terminal cells
//! - Only write what changed between frames

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, with_screen, Screen, TerminalRenderer};
