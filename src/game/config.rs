use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::direction::Direction;
use super::grid::Position;

/// Largest number of columns or rows a field may have
pub const MAX_CELLS_PER_SIDE: i32 = 1000;

/// What happens when the snake reaches the edge of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Leaving one edge re-enters from the opposite edge
    #[default]
    Wrap,
    /// Leaving the field is a collision and resets the game
    Walls,
}

/// Heading given to the snake after a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetDirection {
    /// Always start in the same direction
    Fixed(Direction),
    /// Pick one of the four directions at random
    #[default]
    Random,
}

/// Configuration for the game
///
/// All sizes are in pixels and the field dimensions must be multiples of
/// `cell_size`. The configuration is resolved once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playing field
    pub field_width: i32,
    /// Height of the playing field
    pub field_height: i32,
    /// Side length of one grid cell
    pub cell_size: i32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Edge behavior
    pub boundary: BoundaryPolicy,
    /// Direction chosen when the snake respawns
    pub reset_direction: ResetDirection,
    /// Spawn cell, `None` for the center of the field
    pub spawn: Option<Position>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 640,
            field_height: 480,
            cell_size: 20,
            tick_rate: 5,
            boundary: BoundaryPolicy::Wrap,
            reset_direction: ResetDirection::Random,
            spawn: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom field size
    pub fn new(field_width: i32, field_height: i32) -> Self {
        Self {
            field_width,
            field_height,
            ..Default::default()
        }
    }

    /// A 10x10 cell field with deterministic respawns, handy for tests
    pub fn small() -> Self {
        Self {
            reset_direction: ResetDirection::Fixed(Direction::Right),
            ..Self::new(200, 200)
        }
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Number of grid columns
    pub fn columns(&self) -> i32 {
        self.field_width / self.cell_size
    }

    /// Number of grid rows
    pub fn rows(&self) -> i32 {
        self.field_height / self.cell_size
    }

    /// Total number of cells on the field
    pub fn cell_count(&self) -> usize {
        let columns = usize::try_from(self.columns()).unwrap_or(0);
        let rows = usize::try_from(self.rows()).unwrap_or(0);
        columns.saturating_mul(rows)
    }

    /// Where the snake appears at game start and after every reset
    pub fn spawn_position(&self) -> Position {
        self.spawn.unwrap_or_else(|| {
            Position::new(
                (self.columns() / 2) * self.cell_size,
                (self.rows() / 2) * self.cell_size,
            )
        })
    }

    /// Time between two simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// Validate the configuration
    ///
    /// Returns an error message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size <= 0 {
            return Err("cell_size must be positive".to_string());
        }

        if self.field_width <= 0 || self.field_height <= 0 {
            return Err("field_width and field_height must be positive".to_string());
        }

        if self.field_width % self.cell_size != 0 || self.field_height % self.cell_size != 0 {
            return Err(format!(
                "field dimensions {}x{} must be multiples of cell_size {}",
                self.field_width, self.field_height, self.cell_size
            ));
        }

        if self.columns() > MAX_CELLS_PER_SIDE || self.rows() > MAX_CELLS_PER_SIDE {
            return Err(format!(
                "field is {}x{} cells, at most {} per side",
                self.columns(),
                self.rows(),
                MAX_CELLS_PER_SIDE
            ));
        }

        if self.cell_count() < 2 {
            return Err("field must hold at least two cells".to_string());
        }

        if !(1..=60).contains(&self.tick_rate) {
            return Err(format!(
                "tick_rate must be in 1..=60, got {}",
                self.tick_rate
            ));
        }

        if let Some(spawn) = self.spawn {
            if !super::grid::in_bounds(spawn, self.field_width, self.field_height) {
                return Err(format!("spawn ({}, {}) lies outside the field", spawn.x, spawn.y));
            }
            if spawn.x % self.cell_size != 0 || spawn.y % self.cell_size != 0 {
                return Err(format!(
                    "spawn ({}, {}) is not aligned to the grid",
                    spawn.x, spawn.y
                ));
            }
        }

        Ok(())
    }
}
