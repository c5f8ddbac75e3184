use crossterm::event::KeyCode;

use spaceship_game::{Command, GameStatus};

#[test]
fn menu_only_accepts_start() {
    assert_eq!(
        Command::from_key(GameStatus::Menu, KeyCode::Char(' ')),
        Some(Command::Start)
    );
    for key in [
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Char('r'),
        KeyCode::Char('a'),
        KeyCode::Enter,
    ] {
        assert_eq!(Command::from_key(GameStatus::Menu, key), None);
    }
}

#[test]
fn game_over_only_accepts_restart() {
    assert_eq!(
        Command::from_key(GameStatus::GameOver, KeyCode::Char('r')),
        Some(Command::Restart)
    );
    assert_eq!(
        Command::from_key(GameStatus::GameOver, KeyCode::Char('R')),
        Some(Command::Restart)
    );
    for key in [KeyCode::Left, KeyCode::Right, KeyCode::Char(' ')] {
        assert_eq!(Command::from_key(GameStatus::GameOver, key), None);
    }
}

#[test]
fn playing_maps_movement_and_fire() {
    let p = GameStatus::Playing;
    assert_eq!(Command::from_key(p, KeyCode::Left), Some(Command::MoveLeft));
    assert_eq!(Command::from_key(p, KeyCode::Char('a')), Some(Command::MoveLeft));
    assert_eq!(Command::from_key(p, KeyCode::Right), Some(Command::MoveRight));
    assert_eq!(Command::from_key(p, KeyCode::Char('D')), Some(Command::MoveRight));
    assert_eq!(Command::from_key(p, KeyCode::Char(' ')), Some(Command::Fire));
    assert_eq!(Command::from_key(p, KeyCode::Char('r')), None);
}

#[test]
fn applies_in_matches_state_gate() {
    assert!(Command::Start.applies_in(GameStatus::Menu));
    assert!(!Command::Start.applies_in(GameStatus::GameOver));
    assert!(Command::Restart.applies_in(GameStatus::GameOver));
    assert!(!Command::Restart.applies_in(GameStatus::Playing));
    for c in [Command::MoveLeft, Command::MoveRight, Command::Fire] {
        assert!(c.applies_in(GameStatus::Playing));
        assert!(!c.applies_in(GameStatus::Menu));
        assert!(!c.applies_in(GameStatus::GameOver));
    }
}
