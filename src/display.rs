/// Rendering layer.  All terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game world.  No game logic is performed; this module only translates
/// state into terminal commands, scaling the logical playfield onto
/// whatever terminal size is available.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use spaceship_game::constants::{
    BULLET_WIDTH, ENEMY_HEIGHT, ENEMY_WIDTH, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, SHIP_HEIGHT,
    SHIP_WIDTH,
};
use spaceship_game::{Bullet, Enemy, GameStatus, GameWorld, Ship};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_BACKGROUND: Color = Color::DarkGrey;
const C_HUD_SCORE: Color = Color::White;
const C_SHIP: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Cyan;
const C_BANNER_START: Color = Color::White;
const C_BANNER_OVER: Color = Color::Red;

// ── Logical → terminal mapping ────────────────────────────────────────────────

/// The terminal rectangle the playfield is drawn into (inside the border).
#[derive(Clone, Copy, Debug)]
struct Viewport {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
}

impl Viewport {
    /// Row 0 is the HUD, row 1 and `height - 2` are the border, and the last
    /// row holds the key hints.
    fn for_terminal(width: u16, height: u16) -> Self {
        Self {
            left: 1,
            top: 2,
            cols: width.saturating_sub(2).max(1),
            rows: height.saturating_sub(4).max(1),
        }
    }

    fn col(&self, x: i32) -> u16 {
        let scaled =
            x.clamp(0, PLAYFIELD_WIDTH) as i64 * self.cols as i64 / PLAYFIELD_WIDTH as i64;
        self.left + (scaled as u16).min(self.cols - 1)
    }

    fn row(&self, y: i32) -> u16 {
        let scaled =
            y.clamp(0, PLAYFIELD_HEIGHT) as i64 * self.rows as i64 / PLAYFIELD_HEIGHT as i64;
        self.top + (scaled as u16).min(self.rows - 1)
    }

    /// Width in cells of something `w` logical units wide, at least one.
    fn span(&self, w: i32) -> usize {
        ((w as i64 * self.cols as i64 / PLAYFIELD_WIDTH as i64) as usize).max(1)
    }

    /// Height in cells, at least one.
    fn depth(&self, h: i32) -> u16 {
        ((h as i64 * self.rows as i64 / PLAYFIELD_HEIGHT as i64) as u16).max(1)
    }

    fn bottom(&self) -> u16 {
        self.top + self.rows
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, world: &GameWorld) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::for_terminal(width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border(out, width, height)?;

    match world.status {
        GameStatus::Menu => draw_menu(out, width, height)?,
        GameStatus::Playing | GameStatus::GameOver => {
            draw_background(out, &view)?;
            draw_hud(out, world)?;
            for enemy in &world.enemies {
                draw_enemy(out, &view, enemy)?;
            }
            for bullet in &world.bullets {
                draw_bullet(out, &view, bullet)?;
            }
            draw_ship(out, &view, &world.ship)?;
            if world.status == GameStatus::GameOver {
                draw_game_over(out, width, height, world.score)?;
            }
        }
    }
    draw_controls_hint(out, height, world.status)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Ring the terminal bell as the shot sound.
pub fn play_shot<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(Print('\u{7}'))?;
    Ok(())
}

// ── Border & background ───────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;
    let h = height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

/// A sparse star field, fixed per terminal size.
fn draw_background<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BACKGROUND))?;
    for row in view.top..view.bottom() {
        for col in view.left..view.left + view.cols {
            if (col as u32 * 7 + row as u32 * 13) % 53 == 0 {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print("·"))?;
            }
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &GameWorld) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", world.score)))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(out: &mut W, view: &Viewport, ship: &Ship) -> std::io::Result<()> {
    //   ▲       ← tip, centred
    //  /███\    ← hull, full width
    let col = view.col(ship.x);
    let span = view.span(SHIP_WIDTH);
    // Keep both sprite rows inside the field on short terminals.
    let row = view
        .row(ship.y)
        .min(view.bottom().saturating_sub(2))
        .max(view.top);
    out.queue(style::SetForegroundColor(C_SHIP))?;

    out.queue(cursor::MoveTo(col + (span / 2) as u16, row))?;
    out.queue(Print("▲"))?;

    let hull_row = row + view.depth(SHIP_HEIGHT).saturating_sub(1).max(1);
    if hull_row < view.bottom() {
        out.queue(cursor::MoveTo(col, hull_row))?;
        out.queue(Print(hull(span)))?;
    }
    Ok(())
}

fn hull(span: usize) -> String {
    match span {
        0 | 1 => "█".to_string(),
        2 => "/\\".to_string(),
        n => format!("/{}\\", "█".repeat(n - 2)),
    }
}

fn draw_enemy<W: Write>(out: &mut W, view: &Viewport, enemy: &Enemy) -> std::io::Result<()> {
    //   «▼▼»    ← swept-back wings
    //   ╚══╝    ← engine block (when there is room)
    let col = view.col(enemy.x);
    let span = view.span(ENEMY_WIDTH);
    let row = view.row(enemy.y);
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(wings(span)))?;

    if view.depth(ENEMY_HEIGHT) > 1 && row + 1 < view.bottom() {
        out.queue(cursor::MoveTo(col, row + 1))?;
        out.queue(Print(engine(span)))?;
    }
    Ok(())
}

fn wings(span: usize) -> String {
    match span {
        0 | 1 => "▼".to_string(),
        n => format!("«{}»", "▼".repeat(n.saturating_sub(2))),
    }
}

fn engine(span: usize) -> String {
    match span {
        0 | 1 => "═".to_string(),
        n => format!("╚{}╝", "═".repeat(n.saturating_sub(2))),
    }
}

fn draw_bullet<W: Write>(out: &mut W, view: &Viewport, bullet: &Bullet) -> std::io::Result<()> {
    let col = view.col(bullet.x + BULLET_WIDTH / 2);
    out.queue(cursor::MoveTo(col, view.row(bullet.y)))?;
    out.queue(style::SetForegroundColor(C_BULLET))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_menu<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let cy = height / 2;
    draw_centered(out, width, cy.saturating_sub(2), "★  SPACE  SHOOTER  ★", C_TITLE)?;
    draw_centered(out, width, cy, "Press SPACE to Start", C_BANNER_START)?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    score: u32,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", score);
    let lines: [(&str, Color); 5] = [
        ("╔════════════════════╗", C_BANNER_OVER),
        ("║     GAME  OVER     ║", C_BANNER_OVER),
        ("╚════════════════════╝", C_BANNER_OVER),
        (score_line.as_str(), Color::Yellow),
        ("Press R to Restart", Color::White),
    ];

    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (text, color)) in lines.iter().enumerate() {
        draw_centered(out, width, start_row + i as u16, text, *color)?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    height: u16,
    status: GameStatus,
) -> std::io::Result<()> {
    let hint = match status {
        GameStatus::Menu => "SPACE : Start   Q : Quit",
        GameStatus::Playing => "← → / A D : Move   SPACE : Shoot   Q : Quit",
        GameStatus::GameOver => "R : Restart   Q : Quit",
    };
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
