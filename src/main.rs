use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use torus_snake::controller::GameLoop;
use torus_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrapping grid, in the terminal")]
struct Cli {
    /// TOML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Screen width in pixels
    #[arg(long)]
    screen_width: Option<i32>,

    /// Screen height in pixels
    #[arg(long)]
    screen_height: Option<i32>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<i32>,

    /// Ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "torus_snake.log")]
    log_file: PathBuf,

    /// Log debug events (food, resets)
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.screen_width {
            config.screen_width = width;
        }
        if let Some(height) = self.screen_height {
            config.screen_height = height;
        }
        if let Some(size) = self.cell_size {
            config.cell_size = size;
        }
        if let Some(rate) = self.tick_rate {
            config.tick_rate = rate;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;

    // Log to a file so the terminal UI stays clean
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(level, Config::default(), log_file).context("Failed to initialize logger")?;

    info!(
        "starting: {}x{} screen, {}px cells, {} ticks/s",
        config.screen_width, config.screen_height, config.cell_size, config.tick_rate
    );

    let mut game = GameLoop::new(&config);
    game.run().await?;

    Ok(())
}
