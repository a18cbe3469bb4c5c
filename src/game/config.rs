use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::grid::Grid;

/// Largest number of cells allowed along either axis
pub const MAX_CELLS_PER_AXIS: i32 = 1000;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen width in pixels
    pub screen_width: i32,
    /// Screen height in pixels
    pub screen_height: i32,
    /// Side of one grid cell in pixels
    pub cell_size: i32,
    /// Game ticks per second
    pub tick_rate: u32,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            tick_rate: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        Ok(config)
    }

    /// Check that the geometry describes a whole number of cells
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be positive");
        ensure!(
            self.screen_width > 0 && self.screen_height > 0,
            "screen dimensions must be positive"
        );
        ensure!(
            self.screen_width % self.cell_size == 0,
            "screen_width {} is not a multiple of cell_size {}",
            self.screen_width,
            self.cell_size
        );
        ensure!(
            self.screen_height % self.cell_size == 0,
            "screen_height {} is not a multiple of cell_size {}",
            self.screen_height,
            self.cell_size
        );
        ensure!(
            self.screen_width / self.cell_size <= MAX_CELLS_PER_AXIS
                && self.screen_height / self.cell_size <= MAX_CELLS_PER_AXIS,
            "grid of {}x{} cells exceeds {} cells per axis",
            self.screen_width / self.cell_size,
            self.screen_height / self.cell_size,
            MAX_CELLS_PER_AXIS
        );
        ensure!(
            (1..=1000).contains(&self.tick_rate),
            "tick_rate must be between 1 and 1000, got {}",
            self.tick_rate
        );
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.screen_width, self.screen_height, self.cell_size)
    }

    /// Time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}
