//! Terminal maze runner (default binary).
//!
//! Draws the reference level, reads one WASD command per line and plays
//! until the player escapes, gets caught, or input ends. Both outcomes exit
//! with status 0. Logs go to stderr and are silent unless `RUST_LOG` asks
//! for them.

use anyhow::{Context, Result};
use tracing::info;

use maze_escape::core::{GameConfig, GameEngine, Session};
use maze_escape::input::LineInput;
use maze_escape::term::TerminalRenderer;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let engine = GameEngine::new(GameConfig::default()).context("reference level is invalid")?;

    let mut session = Session::new(engine);
    let mut input = LineInput::stdin();
    let mut term = TerminalRenderer::stdout();

    let state = session
        .run(&mut input, &mut term)
        .context("terminal I/O failed")?;

    info!(
        state = state.as_str(),
        turns = session.engine().turns(),
        "session ended"
    );
    Ok(())
}
