//! RNG module - deterministic food placement
//!
//! Food is dropped on a uniformly random tile. A small LCG keeps the whole game
//! reproducible from a single seed, which the tests and replays rely on.

use crate::types::Tile;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits: the low bits of a power-of-two LCG cycle with a
    /// short period, which would make small grids visibly patterned.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Draw a tile uniformly from `[0, width) x [0, height)`.
    ///
    /// `x` and `y` are independent draws; nothing is excluded.
    pub fn next_tile(&mut self, width: u32, height: u32) -> Tile {
        let x = self.next_range(width) as i32;
        let y = self.next_range(height) as i32;
        Tile::new(x, y)
    }

    /// Current internal state (restarting from it replays the same sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
