use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tile_snake::game::GameConfig;
use tile_snake::modes::{HumanMode, HumanSettings};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tile_snake")]
#[command(version, about = "Snake on a walled, wrapping tile grid")]
struct Cli {
    /// Milliseconds between game ticks
    #[arg(long, default_value = "16")]
    tick_ms: u64,

    /// Milliseconds between redraws
    #[arg(long, default_value = "33")]
    render_ms: u64,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file; logging is off otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The terminal is owned by the game, so logs only ever go to a file
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::default();
    config.validate().context("Invalid game configuration")?;

    let settings = HumanSettings {
        tick_interval: Duration::from_millis(cli.tick_ms.max(1)),
        render_interval: Duration::from_millis(cli.render_ms.max(1)),
        seed: cli.seed,
    };

    let mut human_mode = HumanMode::new(config, settings);
    human_mode.run().await?;

    Ok(())
}
