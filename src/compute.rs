/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameWorld` (and, where needed, a random source) and returns a brand-new
/// `GameWorld`.  Side effects are limited to the injected random source and
/// log output.

use tracing::{debug, info};

use crate::constants::*;
use crate::entities::{Bullet, Enemy, GameStatus, GameWorld, Ship};
use crate::error::InvariantViolation;
use crate::rng::RandomSource;
use crate::state::Trigger;

// ── Constructors ─────────────────────────────────────────────────────────────

/// The world as it looks before the first game: title screen, empty field.
pub fn init_world() -> GameWorld {
    GameWorld::default()
}

/// A freshly reset world, ready to play.
pub fn new_game() -> GameWorld {
    GameWorld {
        status: GameStatus::Playing,
        ..GameWorld::default()
    }
}

/// Apply a start or restart trigger.  The world is reset only if the
/// trigger is valid for the current status; otherwise it is returned as-is.
pub fn begin(state: &GameWorld, trigger: Trigger) -> GameWorld {
    match state.status.on(trigger) {
        Some(GameStatus::Playing) => {
            info!(?trigger, previous_score = state.score, "game started");
            new_game()
        }
        _ => state.clone(),
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_ship_left(state: &GameWorld) -> GameWorld {
    if !state.status.is_playing() {
        return state.clone();
    }
    GameWorld {
        ship: Ship {
            x: (state.ship.x - SHIP_STEP).max(0),
            ..state.ship
        },
        ..state.clone()
    }
}

pub fn move_ship_right(state: &GameWorld) -> GameWorld {
    if !state.status.is_playing() {
        return state.clone();
    }
    GameWorld {
        ship: Ship {
            x: (state.ship.x + SHIP_STEP).min(SHIP_MAX_X),
            ..state.ship
        },
        ..state.clone()
    }
}

/// The bullet that firing from `ship` would create.
pub fn muzzle(ship: &Ship) -> Bullet {
    Bullet {
        x: ship.x + BULLET_MUZZLE_OFFSET,
        y: ship.y,
    }
}

/// Fire a bullet from the ship.  There is no rate limit: every call while
/// playing appends exactly one bullet.
pub fn fire(state: &GameWorld) -> GameWorld {
    if !state.status.is_playing() {
        return state.clone();
    }
    let mut bullets = state.bullets.clone();
    bullets.push(muzzle(&state.ship));
    GameWorld {
        bullets,
        ..state.clone()
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Half-open AABB test: rectangles that merely share an edge do not overlap.
pub fn overlaps(bullet: &Bullet, enemy: &Enemy) -> bool {
    bullet.x < enemy.x + ENEMY_WIDTH
        && bullet.x + BULLET_WIDTH > enemy.x
        && bullet.y < enemy.y + ENEMY_HEIGHT
        && bullet.y + BULLET_HEIGHT > enemy.y
}

/// True once an enemy's bottom edge is at or below the ship's row.
pub fn reaches_ship(enemy: &Enemy, ship: &Ship) -> bool {
    enemy.y + ENEMY_HEIGHT >= ship.y
}

// ── Tick phases ──────────────────────────────────────────────────────────────

fn advance_bullets(bullets: &[Bullet]) -> Vec<Bullet> {
    bullets
        .iter()
        .map(|b| Bullet {
            y: b.y - BULLET_STEP,
            ..*b
        })
        .filter(|b| b.y >= 0)
        .collect()
}

/// Roll for this tick's spawn.  Draws a second value for x only when the
/// first roll hits.
fn roll_spawn(rng: &mut impl RandomSource) -> Option<Enemy> {
    if rng.next_below(SPAWN_ODDS) != 0 {
        return None;
    }
    let x = rng.next_below((PLAYFIELD_WIDTH - ENEMY_WIDTH) as u32) as i32;
    Some(Enemy { x, y: 0 })
}

fn advance_enemies(enemies: &[Enemy]) -> Vec<Enemy> {
    enemies
        .iter()
        .map(|e| Enemy {
            y: e.y + ENEMY_STEP,
            ..*e
        })
        .collect()
}

/// Survivors of the collision pass.
#[derive(Debug, PartialEq, Eq)]
pub struct Collisions {
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub destroyed: u32,
}

/// Match bullets against enemies.  Bullets are visited in storage order and
/// each claims the lowest-indexed live enemy it overlaps; an enemy claimed
/// by an earlier bullet is never tested again.
pub fn resolve_collisions(bullets: &[Bullet], enemies: &[Enemy]) -> Collisions {
    let mut enemy_alive = vec![true; enemies.len()];
    let mut bullet_alive = vec![true; bullets.len()];
    let mut destroyed = 0;

    for (bi, bullet) in bullets.iter().enumerate() {
        let hit = (0..enemies.len())
            .find(|&ei| enemy_alive[ei] && overlaps(bullet, &enemies[ei]));
        if let Some(ei) = hit {
            enemy_alive[ei] = false;
            bullet_alive[bi] = false;
            destroyed += 1;
        }
    }

    Collisions {
        bullets: keep_marked(bullets, &bullet_alive),
        enemies: keep_marked(enemies, &enemy_alive),
        destroyed,
    }
}

fn keep_marked<T: Copy>(items: &[T], keep: &[bool]) -> Vec<T> {
    items
        .iter()
        .zip(keep)
        .filter(|(_, keep)| **keep)
        .map(|(item, _)| *item)
        .collect()
}

fn remove_offscreen(enemies: Vec<Enemy>) -> Vec<Enemy> {
    enemies
        .into_iter()
        .filter(|e| e.y <= PLAYFIELD_HEIGHT)
        .collect()
}

// ── Per-tick update (randomness is injected) ────────────────────────

/// Advance the simulation by one tick.  A world that is not playing comes
/// back unchanged.
pub fn tick(state: &GameWorld, rng: &mut impl RandomSource) -> GameWorld {
    if !state.status.is_playing() {
        return state.clone();
    }
    let tick = state.tick + 1;

    // ── 1. Move bullets, drop those past the top ─────────────────────────────
    let bullets = advance_bullets(&state.bullets);

    // ── 2. Maybe spawn one enemy ─────────────────────────────────────────────
    let mut enemies = state.enemies.clone();
    if let Some(spawned) = roll_spawn(rng) {
        debug!(tick, x = spawned.x, "enemy spawned");
        enemies.push(spawned);
    }

    // ── 3. Move enemies ──────────────────────────────────────────────────────
    let enemies = advance_enemies(&enemies);

    // ── 4. Bullets ↔ enemies ─────────────────────────────────────────────────
    let Collisions {
        bullets,
        enemies,
        destroyed,
    } = resolve_collisions(&bullets, &enemies);
    if destroyed > 0 {
        debug!(tick, destroyed, "enemies destroyed");
    }
    let score = state.score + destroyed * SCORE_PER_ENEMY;

    // ── 5. Loss check, before cleanup ─────────────────────────────────────
    if enemies.iter().any(|e| reaches_ship(e, &state.ship)) {
        let status = state
            .status
            .on(Trigger::EnemyReachedShip)
            .unwrap_or(GameStatus::GameOver);
        info!(tick, score, "game over");
        return GameWorld {
            bullets,
            enemies,
            score,
            status,
            tick,
            ..state.clone()
        };
    }

    // ── 6. Drop enemies past the bottom ──────────────────────────────────────
    let enemies = remove_offscreen(enemies);

    GameWorld {
        bullets,
        enemies,
        score,
        tick,
        ..state.clone()
    }
}

// ── Invariants ───────────────────────────────────────────────────────────────

/// Check the invariants every post-tick world satisfies.
pub fn check_invariants(state: &GameWorld) -> Result<(), InvariantViolation> {
    if !(0..=SHIP_MAX_X).contains(&state.ship.x) {
        return Err(InvariantViolation::ShipOutOfBounds {
            x: state.ship.x,
            max: SHIP_MAX_X,
        });
    }
    if state.ship.y != SHIP_Y {
        return Err(InvariantViolation::ShipRowMoved {
            found: state.ship.y,
            expected: SHIP_Y,
        });
    }
    if let Some((index, b)) = state.bullets.iter().enumerate().find(|(_, b)| b.y < 0) {
        return Err(InvariantViolation::BulletAboveField { index, y: b.y });
    }
    if let Some((index, e)) = state
        .enemies
        .iter()
        .enumerate()
        .find(|(_, e)| e.y > PLAYFIELD_HEIGHT)
    {
        return Err(InvariantViolation::EnemyBelowField { index, y: e.y });
    }
    if state.score % SCORE_PER_ENEMY != 0 {
        return Err(InvariantViolation::ScoreMisaligned {
            score: state.score,
            step: SCORE_PER_ENEMY,
        });
    }
    Ok(())
}
