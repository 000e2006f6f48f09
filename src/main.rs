use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env, Target};
use snake_arcade::game::{GameConfig, GameEngine};
use snake_arcade::modes::HumanMode;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Single-screen Snake with keyboard, mouse-swipe and button controls")]
struct Cli {
    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken over by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            Builder::from_env(Env::default().default_filter_or("off")).init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = GameConfig::default();
    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    log::info!("snake_arcade starting (seed: {:?})", cli.seed);

    let mut human_mode = HumanMode::new(engine);
    human_mode.run().await?;

    Ok(())
}
