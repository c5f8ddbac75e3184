/// Session phase transitions.
///
/// `GameStatus` is the single gate for which engine behaviour is active;
/// this table is the only place a status changes.

use crate::entities::GameStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Start key pressed on the title screen.
    Start,
    /// Restart key pressed on the game-over screen.
    Restart,
    /// An enemy's bottom edge reached the ship's row.
    EnemyReachedShip,
}

impl GameStatus {
    /// The status after `trigger`, or `None` if the trigger does not apply
    /// in this status.
    pub fn on(self, trigger: Trigger) -> Option<GameStatus> {
        match (self, trigger) {
            (GameStatus::Menu, Trigger::Start) => Some(GameStatus::Playing),
            (GameStatus::GameOver, Trigger::Restart) => Some(GameStatus::Playing),
            (GameStatus::Playing, Trigger::EnemyReachedShip) => Some(GameStatus::GameOver),
            _ => None,
        }
    }

    pub fn is_playing(self) -> bool {
        self == GameStatus::Playing
    }
}
