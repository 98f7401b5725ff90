//! Public data models for generated caves, their rooms, and carved passages.

use serde::Serialize;

use crate::types::Coord;

use super::grid::Grid;

/// Height at which passage annotations float above the cave floor.
const ANNOTATION_ELEVATION: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Centre of a tile in world space for a `width`x`height` map centred on the origin.
pub fn tile_to_world_point(tile: Coord, width: usize, height: usize) -> WorldPoint {
    WorldPoint {
        x: -((width / 2) as f32) + 0.5 + tile.x as f32,
        y: ANNOTATION_ELEVATION,
        z: -((height / 2) as f32) + 0.5 + tile.y as f32,
    }
}

/// Debug annotation for one carved tunnel; rooms are identified by their size rank.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Passage {
    pub room_a: usize,
    pub room_b: usize,
    pub tile_a: Coord,
    pub tile_b: Coord,
    pub world_a: WorldPoint,
    pub world_b: WorldPoint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub id: usize,
    pub size: usize,
    pub edge_tile_count: usize,
    pub is_main_room: bool,
    pub is_accessible_from_main_room: bool,
    pub connected_rooms: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedCave {
    /// Seed string that produced this cave, including runtime-drawn seeds.
    pub seed: String,
    pub width: usize,
    pub height: usize,
    pub border_size: usize,
    /// Interior map wrapped in `border_size` solid cells on every side.
    pub map: Grid,
    pub rooms: Vec<RoomSummary>,
    pub passages: Vec<Passage>,
}

impl GeneratedCave {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.map.canonical_bytes();
        bytes.extend((self.border_size as u32).to_le_bytes());
        bytes
    }
}
