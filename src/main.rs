use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use space_explorer::clock::FrameLimiter;
use space_explorer::compute::{init_state, restart, tick};
use space_explorer::constants::FPS;
use space_explorer::display::{self, TerminalCanvas};
use space_explorer::input::{Command, KeyTracker};

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is the game screen, so logs go to a file:
/// `$SPACE_EXPLORER_LOG`, or `space_explorer.log` in the temp directory.
fn log_path() -> PathBuf {
    std::env::var_os("SPACE_EXPLORER_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("space_explorer.log"))
}

fn init_tracing() -> Result<()> {
    let path = log_path();
    let file = File::create(&path)
        .with_context(|| format!("failed creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One tick and one frame per iteration, capped at `FPS`.  Returns when the
/// player quits.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let mut rng = thread_rng();
    let mut state = init_state(&mut rng);
    let mut keys = KeyTracker::new();

    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    let mut canvas = TerminalCanvas::new(cols, rows);
    let mut limiter = FrameLimiter::new(FPS);
    let mut frame: u64 = 0;

    loop {
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            let ev = match rx.try_recv() {
                Ok(ev) => ev,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => bail!("input thread stopped"),
            };
            match ev {
                Event::Key(key) => match keys.record(&key, frame, state.is_game_over()) {
                    Some(Command::Quit) => {
                        info!(score = state.score, frame, "quit");
                        return Ok(());
                    }
                    Some(Command::Restart) => {
                        state = restart(&state, &mut rng);
                        keys.clear();
                    }
                    None => {}
                },
                Event::Resize(cols, rows) => {
                    if canvas.resize(cols, rows) {
                        debug!(cols, rows, "terminal resized");
                        out.queue(terminal::Clear(terminal::ClearType::All))?;
                    }
                }
                _ => {}
            }
        }

        let controls = keys.controls(frame);
        state = tick(&state, &controls, &mut rng);

        display::render(&mut canvas, &state);
        canvas.present(out)?;

        limiter.wait();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    if let Err(err) = init_tracing() {
        eprintln!("warning: logging disabled: {err:#}");
    }

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to initialise terminal")?;
    let result = run(&mut out);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        warn!("exiting with error: {err:#}");
    }
    result
}

fn run<W: Write>(out: &mut W) -> Result<()> {
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    info!(keyboard_enhanced, "terminal ready");

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
            Err(err) => {
                warn!("event read failed: {err}");
                break;
            }
        }
    });

    let result = game_loop(out, &rx);

    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    result
}
