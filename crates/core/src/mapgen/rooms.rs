//! Surviving open regions as rooms, plus the undirected connection graph between them.

use std::cmp::Reverse;
use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap, new_key_type};

use crate::types::Coord;

use super::grid::Grid;
use super::model::RoomSummary;
use super::regions::Region;

new_key_type! {
    pub struct RoomId;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub tiles: Vec<Coord>,
    /// Tiles touching a wall along an edge; the only valid tunnel endpoints.
    pub edge_tiles: Vec<Coord>,
    pub is_main_room: bool,
    pub is_accessible_from_main_room: bool,
    pub connected_rooms: Vec<RoomId>,
}

impl Room {
    pub fn new(tiles: Region, grid: &Grid) -> Self {
        let edge_tiles = tiles
            .iter()
            .copied()
            .filter(|tile| {
                tile.orthogonal_neighbors().into_iter().any(|next| grid.cell_or_wall(next).is_wall())
            })
            .collect();
        Self {
            tiles,
            edge_tiles,
            is_main_room: false,
            is_accessible_from_main_room: false,
            connected_rooms: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_connected(&self, other: RoomId) -> bool {
        self.connected_rooms.contains(&other)
    }
}

/// Larger rooms first.
pub fn room_size_order(room: &Room) -> Reverse<usize> {
    Reverse(room.size())
}

/// Room arena with a fixed iteration order (largest room first).
#[derive(Clone, Debug, Default)]
pub struct RoomGraph {
    rooms: SlotMap<RoomId, Room>,
    order: Vec<RoomId>,
}

impl RoomGraph {
    /// Builds rooms from regions, sorts them by size (stable), and marks the largest as main.
    pub fn from_regions(regions: Vec<Region>, grid: &Grid) -> Self {
        let mut built: Vec<Room> = regions.into_iter().map(|region| Room::new(region, grid)).collect();
        built.sort_by_key(room_size_order);

        let mut graph = Self::default();
        for room in built {
            let id = graph.rooms.insert(room);
            graph.order.push(id);
        }
        if let Some(&main) = graph.order.first() {
            let room = &mut graph.rooms[main];
            room.is_main_room = true;
            room.is_accessible_from_main_room = true;
        }
        graph
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Room ids in sort order.
    pub fn ids(&self) -> &[RoomId] {
        &self.order
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn main_room(&self) -> Option<RoomId> {
        self.order.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.order.iter().map(|&id| (id, &self.rooms[id]))
    }

    /// Position of a room in sort order; used as its public identifier.
    pub fn ordinal(&self, id: RoomId) -> Option<usize> {
        self.order.iter().position(|&candidate| candidate == id)
    }

    pub fn is_accessible(&self, id: RoomId) -> bool {
        self.rooms.get(id).is_some_and(|room| room.is_accessible_from_main_room)
    }

    pub fn all_accessible(&self) -> bool {
        self.rooms.values().all(|room| room.is_accessible_from_main_room)
    }

    /// Records a symmetric connection and spreads main-room reachability across it.
    pub fn connect(&mut self, a: RoomId, b: RoomId) {
        if a == b || !self.rooms.contains_key(a) || !self.rooms.contains_key(b) {
            return;
        }
        if self.is_accessible(a) {
            self.set_accessible_from_main_room(b);
        } else if self.is_accessible(b) {
            self.set_accessible_from_main_room(a);
        }
        if !self.rooms[a].is_connected(b) {
            self.rooms[a].connected_rooms.push(b);
        }
        if !self.rooms[b].is_connected(a) {
            self.rooms[b].connected_rooms.push(a);
        }
    }

    /// Marks `start` and everything transitively connected to it as reachable.
    /// Rooms already marked are not revisited, so cycles terminate.
    pub fn set_accessible_from_main_room(&mut self, start: RoomId) {
        let mut open = VecDeque::from([start]);
        while let Some(id) = open.pop_front() {
            let Some(room) = self.rooms.get_mut(id) else {
                continue;
            };
            if room.is_accessible_from_main_room {
                continue;
            }
            room.is_accessible_from_main_room = true;
            open.extend(room.connected_rooms.iter().copied());
        }
    }

    pub fn summaries(&self) -> Vec<RoomSummary> {
        let mut ordinals = SecondaryMap::new();
        for (ordinal, &id) in self.order.iter().enumerate() {
            ordinals.insert(id, ordinal);
        }
        self.iter()
            .enumerate()
            .map(|(ordinal, (_, room))| RoomSummary {
                id: ordinal,
                size: room.size(),
                edge_tile_count: room.edge_tiles.len(),
                is_main_room: room.is_main_room,
                is_accessible_from_main_room: room.is_accessible_from_main_room,
                connected_rooms: room
                    .connected_rooms
                    .iter()
                    .filter_map(|other| ordinals.get(*other).copied())
                    .collect(),
            })
            .collect()
    }
}
