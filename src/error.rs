use thiserror::Error;

/// A broken world invariant.  The engine never produces one of these on its
/// own; they surface when a world has been assembled or mutated by hand.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("ship x {x} outside 0..={max}")]
    ShipOutOfBounds { x: i32, max: i32 },
    #[error("ship y {found} differs from the fixed row {expected}")]
    ShipRowMoved { found: i32, expected: i32 },
    #[error("bullet {index} above the playfield (y = {y})")]
    BulletAboveField { index: usize, y: i32 },
    #[error("enemy {index} below the playfield (y = {y})")]
    EnemyBelowField { index: usize, y: i32 },
    #[error("score {score} is not a multiple of {step}")]
    ScoreMisaligned { score: u32, step: u32 },
}
