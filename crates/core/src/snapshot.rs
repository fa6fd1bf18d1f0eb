use crate::types::Tile;

/// Immutable, drawable view of one game position.
///
/// Produced by [`GameState::snapshot`](crate::GameState::snapshot). Equal game
/// states always produce equal snapshots, so the hash doubles as a render
/// fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub food: Tile,
    pub head: Tile,
    /// Segments behind the head, neck first.
    pub body: Vec<Tile>,
    pub score: u32,
    pub game_over: bool,
    pub grid_width: u32,
    pub grid_height: u32,
}

impl GameSnapshot {
    /// Status line: `"Score: N"` while running, `"Game Over: N"` once over.
    pub fn display_text(&self) -> String {
        if self.game_over {
            format!("Game Over: {}", self.score)
        } else {
            format!("Score: {}", self.score)
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            food: Tile::default(),
            head: Tile::default(),
            body: Vec::new(),
            score: 0,
            game_over: false,
            grid_width: 0,
            grid_height: 0,
        }
    }
}
