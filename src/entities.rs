/// All game entity types: pure data, no logic.

use crate::constants::{SHIP_START_X, SHIP_Y};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Title screen; waiting for the start key.
    #[default]
    Menu,
    Playing,
    /// Entities stay frozen until the player restarts.
    GameOver,
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ship {
    pub x: i32,
    pub y: i32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            x: SHIP_START_X,
            y: SHIP_Y,
        }
    }
}

// ── Projectiles & enemies ────────────────────────────────────────────────────

/// A player bullet.  Identity is positional; two bullets may coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire simulation state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameWorld {
    pub ship: Ship,
    /// In fire order.
    pub bullets: Vec<Bullet>,
    /// In spawn order; collision tie-breaks use this order.
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub status: GameStatus,
    /// Ticks simulated since the last (re)start.
    pub tick: u64,
}
