//! Cave-construction pipeline that composes the mapgen phases.

use crate::config::GeneratorConfig;
use crate::error::GenerationError;

use super::super::border::pad_with_border;
use super::super::fill::random_fill;
use super::super::model::GeneratedCave;
use super::super::smoothing::smooth;
use super::filtering::{ProcessedMap, process_map};

pub(super) fn generate_cave(
    config: &GeneratorConfig,
    seed: String,
) -> Result<GeneratedCave, GenerationError> {
    config.validate()?;
    let width = config.width as usize;
    let height = config.height as usize;

    let mut grid = random_fill(width, height, &seed, config.fill_percent as u8);
    smooth(&mut grid);

    let ProcessedMap { rooms, passages } = process_map(&mut grid, config.thresholds())?;
    let map = pad_with_border(&grid, config.border_size);

    log::info!(
        "generated {width}x{height} cave from seed {seed:?}: {} room(s), {} passage(s)",
        rooms.len(),
        passages.len()
    );

    Ok(GeneratedCave {
        seed,
        width,
        height,
        border_size: config.border_size,
        map,
        rooms: rooms.summaries(),
        passages,
    })
}
