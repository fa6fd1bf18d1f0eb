//! Session: one game plus the clock that drives it.
//!
//! Both inputs (elapsed time and turns) enter through `&mut self`, so they are
//! serialized by construction. [`SharedSession`] adds a mutex for hosts that
//! read input on another thread.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info};

use crate::clock::TickClock;
use crate::core::{ConfigError, GameConfig, GameSnapshot, GameState, TickOutcome};
use crate::types::{Direction, GameAction};

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    clock: TickClock,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        let clock = TickClock::new(state.config().tick_interval_ms);
        Self { state, clock }
    }

    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        let state = GameState::try_new(config)?;
        info!(
            "new game: grid={}x{} head={:?} food={:?} tick={}ms",
            state.config().grid_width,
            state.config().grid_height,
            state.head(),
            state.food(),
            state.config().tick_interval_ms
        );
        Ok(Self::new(state))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    /// True once the game is over and the clock has stopped.
    pub fn finished(&self) -> bool {
        self.clock.stopped()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn time_until_next_tick_ms(&self) -> u32 {
        self.clock.time_until_next_ms()
    }

    pub fn on_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => self.on_direction(direction),
        }
    }

    pub fn on_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.state.set_direction(direction);
        if !accepted && !self.state.game_over() {
            debug!(
                "turn {} ignored while moving {:?}",
                direction.as_str(),
                self.state.direction()
            );
        }
        accepted
    }

    /// Feed elapsed wall time; runs every tick that fell due.
    ///
    /// Returns the number of ticks that advanced the game. Stops early (and
    /// stops the clock) on the tick that ends the game.
    pub fn on_elapsed(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.clock.advance(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            if self.clock.stopped() {
                break;
            }
            if self.tick_once().advanced {
                ran += 1;
            }
        }
        ran
    }

    /// Run exactly one tick, regardless of the clock.
    pub fn tick_once(&mut self) -> TickOutcome {
        let outcome = self.state.tick();

        if outcome.ate_food {
            info!(
                "food eaten: score={} next food={:?}",
                self.state.score(),
                self.state.food()
            );
        }
        if let Some(collision) = outcome.collision {
            info!(
                "game over: {} collision at {:?} after {} ticks, score={}",
                collision.as_str(),
                self.state.head(),
                self.state.ticks(),
                self.state.score()
            );
        }
        if self.state.game_over() && !self.clock.stopped() {
            self.clock.stop();
        }

        outcome
    }
}

/// Lock-guarded session for multi-threaded hosts.
///
/// The lock is held only for the single mutation or read being performed.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn on_direction(&self, direction: Direction) -> bool {
        self.lock().on_direction(direction)
    }

    pub fn on_action(&self, action: GameAction) -> bool {
        self.lock().on_action(action)
    }

    pub fn on_elapsed(&self, elapsed_ms: u32) -> u32 {
        self.lock().on_elapsed(elapsed_ms)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    pub fn finished(&self) -> bool {
        self.lock().finished()
    }

    /// Run `f` with the session locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.lock())
    }
}
