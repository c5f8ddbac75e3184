/// Key → command mapping, filtered by the current game status.

use crossterm::event::KeyCode;

use crate::entities::GameStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
    Start,
    Restart,
}

impl Command {
    /// The command `code` stands for in `status`, if any.
    ///
    /// Space means "start" on the title screen and "fire" in play; every key
    /// without a meaning in the current status maps to `None`.
    pub fn from_key(status: GameStatus, code: KeyCode) -> Option<Command> {
        match status {
            GameStatus::Menu => match code {
                KeyCode::Char(' ') => Some(Command::Start),
                _ => None,
            },
            GameStatus::GameOver => match code {
                KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
                _ => None,
            },
            GameStatus::Playing => match code {
                KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                    Some(Command::MoveLeft)
                }
                KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                    Some(Command::MoveRight)
                }
                KeyCode::Char(' ') => Some(Command::Fire),
                _ => None,
            },
        }
    }

    /// Whether this command has any effect in `status`.
    pub fn applies_in(self, status: GameStatus) -> bool {
        match self {
            Command::Start => status == GameStatus::Menu,
            Command::Restart => status == GameStatus::GameOver,
            Command::MoveLeft | Command::MoveRight | Command::Fire => status.is_playing(),
        }
    }
}
