/// Fixed gameplay constants.  All positions and sizes are in logical
/// playfield units; the presentation layer scales them to its own surface.

use std::time::Duration;

// ── Playfield ────────────────────────────────────────────────────────────────

pub const PLAYFIELD_WIDTH: i32 = 400;
pub const PLAYFIELD_HEIGHT: i32 = 600;

// ── Entity dimensions ────────────────────────────────────────────────────────

pub const SHIP_WIDTH: i32 = 40;
pub const SHIP_HEIGHT: i32 = 20;
/// Gap between the ship's bottom edge and the bottom of the playfield.
pub const SHIP_BOTTOM_MARGIN: i32 = 10;

pub const BULLET_WIDTH: i32 = 5;
pub const BULLET_HEIGHT: i32 = 10;

pub const ENEMY_WIDTH: i32 = 30;
pub const ENEMY_HEIGHT: i32 = 20;

// ── Motion ───────────────────────────────────────────────────────────────────

pub const SHIP_STEP: i32 = 10;
pub const BULLET_STEP: i32 = 10;
pub const ENEMY_STEP: i32 = 5;

// ── Spawning & scoring ──────────────────────────────────────────────────────

/// One enemy spawns on a tick iff a roll in `0..SPAWN_ODDS` comes up 0.
pub const SPAWN_ODDS: u32 = 20;
pub const SCORE_PER_ENEMY: u32 = 10;

// ── Timing ───────────────────────────────────────────────────────────────────

pub const TICK_INTERVAL: Duration = Duration::from_millis(30);
/// Upper bound on ticks run by a single `Session::advance` call.
pub const MAX_TICKS_PER_ADVANCE: u32 = 5;

// ── Derived ──────────────────────────────────────────────────────────────────

pub const SHIP_START_X: i32 = (PLAYFIELD_WIDTH - SHIP_WIDTH) / 2;
pub const SHIP_Y: i32 = PLAYFIELD_HEIGHT - SHIP_HEIGHT - SHIP_BOTTOM_MARGIN;
pub const SHIP_MAX_X: i32 = PLAYFIELD_WIDTH - SHIP_WIDTH;
/// Bullets leave the ship two units left of its centre line.
pub const BULLET_MUZZLE_OFFSET: i32 = SHIP_WIDTH / 2 - 2;
