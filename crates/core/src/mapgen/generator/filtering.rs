//! Post-smoothing cleanup: erase slivers and closets, then turn what is left into rooms.

use crate::config::RegionThresholds;
use crate::error::GenerationError;
use crate::types::Cell;

use super::super::connector::connect_closest_rooms;
use super::super::grid::Grid;
use super::super::model::Passage;
use super::super::regions::replace_small_regions;
use super::super::rooms::RoomGraph;

#[derive(Clone, Debug)]
pub struct ProcessedMap {
    pub rooms: RoomGraph,
    pub passages: Vec<Passage>,
}

/// Removes undersized wall and room regions, builds the room graph, and carves
/// passages until every room is reachable from the largest one.
pub fn process_map(
    grid: &mut Grid,
    thresholds: RegionThresholds,
) -> Result<ProcessedMap, GenerationError> {
    let walls = replace_small_regions(grid, Cell::Wall, thresholds.wall, Cell::Floor);
    let room_regions = replace_small_regions(grid, Cell::Floor, thresholds.room, Cell::Wall);
    log::debug!(
        "{} wall region(s) and {} room region(s) survived filtering",
        walls.len(),
        room_regions.len()
    );

    if room_regions.is_empty() {
        return Err(GenerationError::NoViableRooms { room_threshold_size: thresholds.room });
    }

    let mut rooms = RoomGraph::from_regions(room_regions, grid);
    let passages = connect_closest_rooms(grid, &mut rooms)?;
    Ok(ProcessedMap { rooms, passages })
}
