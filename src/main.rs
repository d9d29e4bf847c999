use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use term_life::{AnimationLoop, GameState, Screen, ShutdownFlag, TerminalScreen, config::Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config =
        Config::try_parse_with_help(std::env::args_os()).unwrap_or_else(|err| err.exit());
    init_tracing(config.log_file.as_deref())?;

    let shutdown = ShutdownFlag::new();
    let handler_flag = shutdown.clone();
    ctrlc::set_handler(move || handler_flag.request())
        .context("failed to install interrupt handler")?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let screen =
        TerminalScreen::open(shutdown.clone()).context("failed to initialize terminal display")?;
    let (rows, cols) = screen.size().context("failed to query terminal size")?;
    let state = GameState::seeded(rows, cols, seed)
        .context("terminal too small for a grid")?
        .with_topology(config.topology())
        .with_frame_delay(config.frame_delay());
    info!(rows, cols, seed, "starting simulation");

    let mut animation = AnimationLoop::new(screen, state, shutdown);
    let outcome = animation.run();
    let (screen, state) = animation.into_parts();
    drop(screen);

    let reason = outcome.context("display error")?;
    info!(?reason, generation = state.generation, "exiting");
    Ok(())
}

/// Logs go to a file when asked for; stdout belongs to the display
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
