//! Public entry point that owns a validated config and runs the generation pipeline.

mod filtering;
mod pipeline;

pub use filtering::{ProcessedMap, process_map};

use crate::config::GeneratorConfig;
use crate::error::{ConfigError, GenerationError};

use super::model::GeneratedCave;

pub struct CaveGenerator {
    config: GeneratorConfig,
}

impl CaveGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds a cave from scratch. In random-seed mode every call draws a new seed.
    pub fn generate(&self) -> Result<GeneratedCave, GenerationError> {
        pipeline::generate_cave(&self.config, self.config.resolve_seed())
    }

    pub fn generate_with_seed(&self, seed: &str) -> Result<GeneratedCave, GenerationError> {
        pipeline::generate_cave(&self.config, seed.to_string())
    }
}
