mod cli;
mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use spaceship_game::{Command, GameEvent, GameStatus, RandomSource, RngSource, Session};

use crate::cli::Args;

/// Redraw cadence while no game is ticking (menu, game over).
const IDLE_FRAME: Duration = Duration::from_millis(50);

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the renderer, so logs only ever go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// What the host should do after a key press.
enum KeyOutcome {
    Quit,
    Command(Command),
    Nothing,
}

fn classify(status: GameStatus, key: KeyEvent) -> KeyOutcome {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = key;
    // Release events only arrive on keyboard-enhanced terminals; key repeat
    // is the terminal's business, so Press and Repeat both count.
    if kind == KeyEventKind::Release {
        return KeyOutcome::Nothing;
    }
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyOutcome::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => KeyOutcome::Quit,
        _ => Command::from_key(status, code)
            .map(KeyOutcome::Command)
            .unwrap_or(KeyOutcome::Nothing),
    }
}

/// Runs until the player quits or the input source closes.
fn run<W: Write, R: RandomSource>(
    out: &mut W,
    session: &mut Session<R>,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut last = Instant::now();

    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            match rx.try_recv() {
                Ok(Event::Key(key)) => match classify(session.status(), key) {
                    KeyOutcome::Quit => {
                        info!("quit requested");
                        return Ok(());
                    }
                    KeyOutcome::Command(command) => session.handle(command),
                    KeyOutcome::Nothing => {}
                },
                Ok(_) => {}
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    warn!("input source closed");
                    return Ok(());
                }
            }
        }

        // ── Simulate ──────────────────────────────────────────────────────────
        let now = Instant::now();
        session.advance(now - last);
        last = now;

        // ── Present ───────────────────────────────────────────────────────────
        for event in session.drain_events() {
            if let GameEvent::BulletFired { .. } = event {
                display::play_shot(out)?;
            }
        }
        display::render(out, session.world()).context("failed to draw frame")?;

        let wait = session.until_next_tick().unwrap_or(IDLE_FRAME);
        thread::sleep(wait.min(IDLE_FRAME));
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    info!(seed = ?args.seed, "session created");
    let mut session = Session::new(rng);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &mut session, &rx);
    session.shutdown();

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        warn!(error = %err, "session ended with an error");
    }
    info!(score = session.world().score, "exiting");
    result
}
