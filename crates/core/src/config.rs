//! Generator settings, their defaults, and TOML persistence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::ConfigError;
use crate::mapgen::generate_runtime_seed;

pub const DEFAULT_WIDTH: i32 = 80;
pub const DEFAULT_HEIGHT: i32 = 60;
pub const DEFAULT_FILL_PERCENT: i32 = 47;
pub const DEFAULT_BORDER_SIZE: usize = 1;
pub const DEFAULT_THRESHOLD_SIZE: usize = 50;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: i32,
    pub height: i32,
    pub seed: String,
    /// Ignore `seed` and draw a fresh one from the clock on every generation.
    pub use_random_seed: bool,
    pub fill_percent: i32,
    pub border_size: usize,
    pub wall_threshold_size: usize,
    pub room_threshold_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: "cave".to_string(),
            use_random_seed: false,
            fill_percent: DEFAULT_FILL_PERCENT,
            border_size: DEFAULT_BORDER_SIZE,
            wall_threshold_size: DEFAULT_THRESHOLD_SIZE,
            room_threshold_size: DEFAULT_THRESHOLD_SIZE,
        }
    }
}

/// Minimum region sizes below which regions are erased during post-processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionThresholds {
    pub wall: usize,
    pub room: usize,
}

impl Default for RegionThresholds {
    fn default() -> Self {
        Self { wall: DEFAULT_THRESHOLD_SIZE, room: DEFAULT_THRESHOLD_SIZE }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidDimensions { width: self.width, height: self.height });
        }
        if !(0..=100).contains(&self.fill_percent) {
            return Err(ConfigError::FillPercentOutOfRange(self.fill_percent));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> RegionThresholds {
        RegionThresholds { wall: self.wall_threshold_size, room: self.room_threshold_size }
    }

    /// The seed string a generation run should use right now.
    pub fn resolve_seed(&self) -> String {
        if self.use_random_seed { generate_runtime_seed() } else { self.seed.clone() }
    }

    pub fn from_toml_str(content: &str) -> io::Result<Self> {
        toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        let content = toml::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}
