/// The simulation context: one game session owned by its host.
///
/// A `Session` bundles the world, the random source and the tick driver, and
/// is the only thing that mutates them.  Hosts push commands and elapsed time
/// in, then read the world and drain events out between calls.

use std::time::Duration;

use tracing::{error, trace};

use crate::compute::{
    begin, check_invariants, fire, init_world, move_ship_left, move_ship_right, tick,
};
use crate::constants::{MAX_TICKS_PER_ADVANCE, SCORE_PER_ENEMY, TICK_INTERVAL};
use crate::driver::TickDriver;
use crate::entities::{GameStatus, GameWorld};
use crate::input::Command;
use crate::rng::RandomSource;
use crate::state::Trigger;

/// Notifications pushed from the core to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A game was (re)started from the menu or game-over screen.
    Started,
    /// A bullet left the ship; hosts typically play the shot sound.
    BulletFired { x: i32, y: i32 },
    /// One tick destroyed `count` enemies.
    EnemyDestroyed { count: u32 },
    GameOver { score: u32 },
}

pub struct Session<R> {
    world: GameWorld,
    rng: R,
    driver: TickDriver,
    events: Vec<GameEvent>,
}

impl<R: RandomSource> Session<R> {
    /// A session sitting on the title screen.
    pub fn new(rng: R) -> Self {
        Self {
            world: init_world(),
            rng,
            driver: TickDriver::new(TICK_INTERVAL),
            events: Vec::new(),
        }
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn status(&self) -> GameStatus {
        self.world.status
    }

    pub fn is_ticking(&self) -> bool {
        self.driver.is_running()
    }

    /// Time until the next tick is due, or `None` while no game is running.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.driver.is_running().then(|| self.driver.until_next())
    }

    /// Apply one command.  Commands that have no meaning in the current
    /// status are ignored.
    pub fn handle(&mut self, command: Command) {
        if !command.applies_in(self.world.status) {
            trace!(?command, status = ?self.world.status, "command ignored");
            return;
        }
        match command {
            Command::Start => self.restart(Trigger::Start),
            Command::Restart => self.restart(Trigger::Restart),
            Command::MoveLeft => self.world = move_ship_left(&self.world),
            Command::MoveRight => self.world = move_ship_right(&self.world),
            Command::Fire => {
                self.world = fire(&self.world);
                if let Some(b) = self.world.bullets.last() {
                    self.events.push(GameEvent::BulletFired { x: b.x, y: b.y });
                }
            }
        }
    }

    fn restart(&mut self, trigger: Trigger) {
        self.world = begin(&self.world, trigger);
        if self.world.status.is_playing() {
            self.driver.start();
            self.events.push(GameEvent::Started);
        }
    }

    /// Feed elapsed wall-clock time and run every tick that became due.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let due = self.driver.advance(elapsed, MAX_TICKS_PER_ADVANCE);
        let mut ran = 0;
        for _ in 0..due {
            if !self.step() {
                break;
            }
            ran += 1;
        }
        ran
    }

    /// Run exactly one tick, regardless of elapsed time.  Returns `false`
    /// without touching the world if no game is running.
    pub fn step(&mut self) -> bool {
        if !self.world.status.is_playing() {
            return false;
        }
        let before = self.world.score;
        self.world = tick(&self.world, &mut self.rng);

        if cfg!(debug_assertions) {
            if let Err(violation) = check_invariants(&self.world) {
                error!(%violation, tick = self.world.tick, "world invariant broken");
            }
        }

        let gained = self.world.score - before;
        if gained > 0 {
            self.events.push(GameEvent::EnemyDestroyed {
                count: gained / SCORE_PER_ENEMY,
            });
        }
        if self.world.status == GameStatus::GameOver {
            self.driver.stop();
            self.events.push(GameEvent::GameOver {
                score: self.world.score,
            });
        }
        true
    }

    /// Take every event recorded since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Stop ticking; the world stays readable.
    pub fn shutdown(&mut self) {
        self.driver.stop();
    }
}
