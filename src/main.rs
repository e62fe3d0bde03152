//! Terminal 2048 runner (default binary).
//!
//! Reads config from the environment, renders the session through the
//! framebuffer renderer and feeds it one key press at a time. Every event is
//! handled to completion before the next one is read.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use tui_2048::config::Config;
use tui_2048::core::{GameSession, GameSnapshot};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::logging::initialize_logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env();
    initialize_logging(&config)?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::new(rng);
    session.start();
    info!(seed = ?config.seed, "session created");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = session.score(), moves = session.moves(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession<StdRng>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            // Key repeat/release and mouse/focus events carry no game command.
            _ => {}
        }
    }
}
