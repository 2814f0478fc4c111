//! Terminal runner (default binary).
//!
//! Owns the single `GameSession` and drives it from one loop: crossterm key
//! events become `GameAction`s, and every frame the elapsed time is fed to the
//! session's gravity timer. Rendering reads a snapshot after each frame.
//!
//! Logging goes to the file named by `TETRIS_LOG_PATH` (stdout belongs to the
//! game), at the level in `TETRIS_LOG_LEVEL` (default: info).

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::Level;

use term_blocks::core::{GameConfig, GameSession, GameSnapshot};
use term_blocks::input::{action_for_key, should_quit};
use term_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use term_blocks::types::TICK_MS;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    let mut session = GameSession::new(config.clone())
        .with_context(|| format!("invalid game configuration: {:?}", config))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var("TETRIS_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let level = std::env::var("TETRIS_LOG_LEVEL")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let file = File::create(&path).with_context(|| format!("create log file {}", path))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(level)
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key) {
                        session.apply_action(action);
                    }
                }
            }
        }

        // Gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            session.tick(elapsed_ms);
        }
    }
}
