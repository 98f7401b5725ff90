pub mod config;
pub mod error;
pub mod mapgen;
pub mod types;

pub use config::{GeneratorConfig, RegionThresholds};
pub use error::{ConfigError, GenerationError};
pub use mapgen::{CaveGenerator, GeneratedCave, Grid, generate_cave};
pub use types::*;
