use anyhow::Result;
use clap::{Parser, ValueEnum};
use grid_snake::game::{BoundaryPolicy, Direction, GameConfig, ResetDirection, Session};
use grid_snake::logging::init_file_logger;
use grid_snake::modes::HumanMode;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic Snake on a fixed grid")]
struct Cli {
    /// JSON file with a full or partial game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Field height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Side of one grid cell in pixels
    #[arg(long)]
    cell_size: Option<i32>,

    /// Simulation ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Reset when the snake hits the edge instead of wrapping around
    #[arg(long)]
    walls: bool,

    /// Heading after a respawn
    #[arg(long)]
    reset_direction: Option<Heading>,

    /// Seed for apple placement and random respawn headings
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Heading {
    Random,
    Up,
    Down,
    Left,
    Right,
}

impl From<Heading> for ResetDirection {
    fn from(heading: Heading) -> Self {
        match heading {
            Heading::Random => ResetDirection::Random,
            Heading::Up => ResetDirection::Fixed(Direction::Up),
            Heading::Down => ResetDirection::Fixed(Direction::Down),
            Heading::Left => ResetDirection::Fixed(Direction::Left),
            Heading::Right => ResetDirection::Fixed(Direction::Right),
        }
    }
}

impl Cli {
    /// Resolve the game configuration: file first, then flag overrides.
    /// Validation happens when the session starts.
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.field_width = width;
        }
        if let Some(height) = self.height {
            config.field_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate = tick_rate;
        }
        if self.walls {
            config.boundary = BoundaryPolicy::Walls;
        }
        if let Some(heading) = self.reset_direction {
            config.reset_direction = heading.into();
        }

        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logger(path)?;
    }

    // Create game configuration from CLI arguments
    let config = cli.game_config()?;
    info!("starting with {:?}", config);

    let session = match cli.seed {
        Some(seed) => Session::with_seed(config, seed)?,
        None => Session::new(config)?,
    };

    let mut human_mode = HumanMode::new(session);
    human_mode.run().await?;

    Ok(())
}
