mod display;
mod terminal;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal as term, ExecutableCommand,
};

use invaders::config::{Args, GameConfig};
use invaders::error::GameError;
use invaders::game::Game;
use invaders::limiter::FrameLimiter;

use display::{TerminalRenderer, Viewport};
use terminal::TerminalInput;

const MIN_COLS: u16 = 40;
const MIN_ROWS: u16 = 15;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The game owns the terminal, so stderr is never a log target.  Without a
/// log file no logger is installed and every record is dropped.
fn logger_builder(log_file: Option<&Path>) -> Result<Option<env_logger::Builder>, GameError> {
    let Some(path) = log_file else {
        return Ok(None);
    };
    let file = File::create(path).map_err(|source| GameError::Logger {
        path: path.display().to_string(),
        source,
    })?;
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.target(env_logger::Target::Pipe(Box::new(file)));
    Ok(Some(builder))
}

fn init_logging(log_file: Option<&Path>) -> Result<(), GameError> {
    if let Some(mut builder) = logger_builder(log_file)? {
        builder.init();
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let config = Args::parse().into_config()?;
    init_logging(config.log_file.as_deref())?;
    log::info!(
        "starting '{}' with world {}x{} at {} fps",
        config.title,
        config.world.width,
        config.world.height,
        config.fps
    );

    let (cols, rows) = term::size()?;
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(GameError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        });
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    term::enable_raw_mode()?;
    out.execute(term::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;
    out.execute(term::SetTitle(&config.title))?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the frame loop never
    // blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(term::LeaveAlternateScreen);
    let _ = term::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("game loop aborted: {}", err);
    }
    result
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// input → state update → render → fixed pacing wait, until the player quits.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
) -> Result<(), GameError> {
    let mut game = Game::new(config.world);
    let mut input = TerminalInput::new();
    let limiter = FrameLimiter::new(config.fps);

    loop {
        let (cols, rows) = term::size()?;
        let viewport = Viewport::new(cols, rows, config.world);

        input.pump(rx, &viewport);
        if input.quit_requested() {
            log::info!("quit requested in {:?}", game.state());
            return Ok(());
        }

        game.frame(&mut input, Instant::now());

        let mut renderer = TerminalRenderer::begin(out, viewport)?;
        game.render(&mut renderer)?;
        renderer.finish()?;

        limiter.wait();
    }
}
