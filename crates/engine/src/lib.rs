//! Game engine: drives the core state machine in time.
//!
//! The core knows nothing about clocks. This crate adds the fixed-period
//! scheduler ([`TickClock`]) and the [`Session`] that serializes turns and
//! ticks onto one game, stops ticking once the game is over, and logs the
//! interesting moments through the `log` facade.

pub mod clock;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use clock::TickClock;
pub use session::{Session, SharedSession};
