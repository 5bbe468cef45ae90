use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use snake::clock::FrameLimiter;
use snake::term::{KeyReader, TermManager};
use snake::{Config, Game, GameError};

/// Snake on a wrap-around board, played in the terminal.
#[derive(Parser)]
#[command(name = "snake")]
struct Args {
    /// YAML config file; defaults are used if it does not exist
    #[arg(long, default_value = "snake.yaml")]
    config: PathBuf,

    /// Seed for food placement and reset directions
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG filters them, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The screen belongs to the game, so logs only ever go to a file
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = Config::load(&args.config)
        .with_context(|| format!("cannot load config from {}", args.config.display()))?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?args.seed, tick_rate = config.tick_rate, "starting");

    let mut game = Game::new(&config, rng);
    let mut term = TermManager::new(game.board()).context("cannot use this terminal")?;
    let mut pacer = FrameLimiter::new(config.tick_period());

    let result = term.setup().and_then(|_| game.run(&mut KeyReader, &mut term, &mut pacer));
    finish(result, term.restore())
}

/// The game's own error wins over a failed terminal restore, which is only logged.
fn finish(result: Result<(), GameError>, restored: Result<(), GameError>) -> Result<()> {
    if let Err(err) = restored {
        warn!(%err, "failed to restore terminal");
    }
    result.context("game stopped unexpectedly")
}
