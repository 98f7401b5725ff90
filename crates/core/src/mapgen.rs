//! Procedural cave synthesis: noise fill, cellular smoothing, region cleanup, and
//! room connection, split into one submodule per phase.

pub mod model;

mod border;
mod connector;
mod fill;
mod generator;
mod grid;
mod line;
mod regions;
mod rooms;
mod seed;
mod smoothing;

pub use border::pad_with_border;
pub use connector::{PASSAGE_RADIUS, connect_closest_rooms};
pub use fill::random_fill;
pub use generator::{CaveGenerator, ProcessedMap, process_map};
pub use grid::Grid;
pub use line::line;
pub use model::{GeneratedCave, Passage, RoomSummary, WorldPoint, tile_to_world_point};
pub use regions::{Region, regions, replace_small_regions};
pub use rooms::{Room, RoomGraph, RoomId, room_size_order};
pub use seed::{generate_runtime_seed, hash_seed};
pub use smoothing::{SMOOTHING_ITERATIONS, smooth, smooth_once, surrounding_wall_count};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;

pub fn generate_cave(config: &GeneratorConfig) -> Result<GeneratedCave, GenerationError> {
    CaveGenerator::new(config.clone())?.generate()
}
