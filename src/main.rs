//! Terminal Typefall runner (default binary).
//!
//! Reads configuration from the environment, then runs a fixed-tick loop:
//! render, poll crossterm input until the next tick, advance the simulation.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use typefall::core::{GameSnapshot, GameState};
use typefall::input::{handle_key_event, should_quit};
use typefall::narrator::{self, Narrator};
use typefall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use typefall::types::{Millis, TICK_MS};
use typefall::{logging, AppConfig, Session};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let catalog = config.load_catalog()?;
    let seed = config.seed_or_clock();
    log::info!("seed {}", seed);
    let narrator = narrator::from_command(config.tts_command.as_deref());
    let mut session = Session::new(GameState::new(catalog, seed), narrator);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<N: Narrator>(term: &mut TerminalRenderer, session: &mut Session<N>) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as Millis;

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(now_ms(), &mut snapshot);
        view.render_into(&snapshot, session.typed(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(input) = handle_key_event(key) {
                        session.handle(input, now_ms());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.advance(now_ms());
        }
    }
}
