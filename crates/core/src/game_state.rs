//! Game state module - the snake state machine
//!
//! Owns the head, body, food, velocity and the game-over flag, and advances
//! them once per tick. Two entry points mutate it, [`GameState::set_direction`]
//! and [`GameState::tick`]; everything else is a read.

use crate::config::{ConfigError, GameConfig};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, Tile, Velocity};

/// Seed used when the configuration leaves it open.
pub const DEFAULT_SEED: u32 = 1;

/// Lifecycle of a game. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Over,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// Head left the grid.
    Wall,
    /// Head ran into a body segment.
    SelfBody,
}

impl Collision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collision::Wall => "wall",
            Collision::SelfBody => "self",
        }
    }
}

/// Result of a single [`GameState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// False when the tick was ignored because the game is over.
    pub advanced: bool,
    /// Head was on the food at the start of the tick and the snake grew.
    pub ate_food: bool,
    /// Set on the tick that ended the game.
    pub collision: Option<Collision>,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    config: GameConfig,
    head: Tile,
    /// Segments behind the head, neck first, tail last.
    body: Vec<Tile>,
    food: Tile,
    velocity: Velocity,
    game_over: bool,
    rng: SimpleRng,
    /// Number of ticks that actually advanced the snake.
    ticks: u64,
}

impl GameState {
    /// Create a new game from a validated configuration.
    ///
    /// The head starts at `initial_head` moving right with an empty body, and
    /// the food is placed randomly straight away (so `initial_food` never
    /// survives construction).
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let mut state = Self {
            head: config.initial_head,
            body: Vec::new(),
            food: config.initial_food,
            velocity: Direction::Right.delta(),
            game_over: false,
            rng: SimpleRng::new(seed),
            ticks: 0,
            config,
        };
        state.place_food();
        Ok(state)
    }

    /// Build an arbitrary position without validation.
    ///
    /// Intended for tests and tooling that need a specific layout. The RNG is
    /// seeded from `seed` and the food is left exactly where given.
    pub fn from_parts(
        config: GameConfig,
        head: Tile,
        body: Vec<Tile>,
        direction: Direction,
        food: Tile,
        seed: u32,
    ) -> Self {
        Self {
            config,
            head,
            body,
            food,
            velocity: direction.delta(),
            game_over: false,
            rng: SimpleRng::new(seed),
            ticks: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn head(&self) -> Tile {
        self.head
    }

    pub fn body(&self) -> &[Tile] {
        &self.body
    }

    pub fn food(&self) -> Tile {
        self.food
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn direction(&self) -> Option<Direction> {
        Direction::from_delta(self.velocity)
    }

    /// Score is the body length; it is never stored separately.
    pub fn score(&self) -> u32 {
        self.body.len() as u32
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::Over
        } else {
            GameStatus::Running
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Steer the snake.
    ///
    /// A turn straight back into the neck is dropped without error, as is any
    /// turn once the game is over. The check is against the current velocity,
    /// so two quick turns within one tick can still chain into a reversal.
    /// Returns whether the turn was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let (vx, vy) = self.velocity;
        let allowed = match direction {
            Direction::Up => vy != 1,
            Direction::Down => vy != -1,
            Direction::Left => vx != 1,
            Direction::Right => vx != -1,
        };
        if allowed {
            self.velocity = direction.delta();
        }
        allowed
    }

    /// Advance the game by one step.
    ///
    /// Order matters: growth is decided on the pre-move head, the body shifts
    /// before the head advances, and collisions are tested against the shifted
    /// body.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::default();
        }

        let mut outcome = TickOutcome {
            advanced: true,
            ..Default::default()
        };

        // Eat. The pushed value is overwritten by the shift below.
        if self.head == self.food {
            self.body.push(self.food);
            self.place_food();
            outcome.ate_food = true;
        }

        // Shift tail toward head; segment 0 takes the old head.
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        if let Some(neck) = self.body.first_mut() {
            *neck = self.head;
        }

        self.head = self.head.offset(self.velocity);
        self.ticks += 1;

        if self.body.contains(&self.head) {
            self.game_over = true;
            outcome.collision = Some(Collision::SelfBody);
        }
        if !self
            .head
            .in_bounds(self.config.grid_width, self.config.grid_height)
        {
            self.game_over = true;
            outcome.collision.get_or_insert(Collision::Wall);
        }

        outcome
    }

    /// Move the food to a uniformly random tile.
    ///
    /// Draws with replacement and does not avoid the snake, so food can appear
    /// under the body.
    pub fn place_food(&mut self) {
        self.food = self
            .rng
            .next_tile(self.config.grid_width, self.config.grid_height);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.food = self.food;
        out.head = self.head;
        out.body.clear();
        out.body.extend_from_slice(&self.body);
        out.score = self.score();
        out.game_over = self.game_over;
        out.grid_width = self.config.grid_width;
        out.grid_height = self.config.grid_height;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Pure form of [`GameState::tick`]: returns the next state and leaves the
/// input untouched.
pub fn step(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.tick();
    next
}
