//! Fixed-timestep arcade shooter core.
//!
//! The library holds everything with real logic: the entity model, the
//! per-tick simulation, the Menu/Playing/GameOver state machine and the key
//! mapping.  Rendering, sound and terminal handling live in the binary.

pub mod compute;
pub mod constants;
pub mod driver;
pub mod entities;
pub mod error;
pub mod input;
pub mod rng;
pub mod session;
pub mod state;

pub use entities::{Bullet, Enemy, GameStatus, GameWorld, Ship};
pub use error::InvariantViolation;
pub use input::Command;
pub use rng::{RandomSource, RngSource};
pub use session::{GameEvent, Session};
