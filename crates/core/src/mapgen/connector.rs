//! Nearest-pair room linking and tunnel carving until every room reaches the main room.

use crate::error::GenerationError;
use crate::types::{Cell, Coord};

use super::grid::Grid;
use super::line::line;
use super::model::{Passage, tile_to_world_point};
use super::rooms::{RoomGraph, RoomId};

/// Tunnels clear every cell within this radius of the carved line.
pub const PASSAGE_RADIUS: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Candidate {
    distance: i64,
    room_a: RoomId,
    room_b: RoomId,
    tile_a: Coord,
    tile_b: Coord,
}

/// Links isolated rooms to their nearest neighbour, then keeps bridging the closest
/// unreachable room to the reachable set until the main room reaches everything.
pub fn connect_closest_rooms(
    grid: &mut Grid,
    rooms: &mut RoomGraph,
) -> Result<Vec<Passage>, GenerationError> {
    let mut passages = Vec::new();
    connect_isolated_rooms(grid, rooms, &mut passages);
    ensure_accessibility_from_main_room(grid, rooms, &mut passages)?;
    Ok(passages)
}

fn connect_isolated_rooms(grid: &mut Grid, rooms: &mut RoomGraph, passages: &mut Vec<Passage>) {
    let ids = rooms.ids().to_vec();
    for &room_a in &ids {
        let has_connections =
            rooms.get(room_a).is_some_and(|room| !room.connected_rooms.is_empty());
        if has_connections {
            continue;
        }

        let mut best = None;
        for &room_b in &ids {
            consider_pair(rooms, room_a, room_b, &mut best);
        }
        if let Some(candidate) = best {
            passages.push(create_passage(grid, rooms, candidate));
        }
    }
}

fn ensure_accessibility_from_main_room(
    grid: &mut Grid,
    rooms: &mut RoomGraph,
    passages: &mut Vec<Passage>,
) -> Result<(), GenerationError> {
    loop {
        let (accessible, pending): (Vec<RoomId>, Vec<RoomId>) =
            rooms.ids().iter().partition(|&&id| rooms.is_accessible(id));
        if pending.is_empty() {
            return Ok(());
        }

        let mut best = None;
        for &room_a in &pending {
            for &room_b in &accessible {
                consider_pair(rooms, room_a, room_b, &mut best);
            }
        }
        let Some(candidate) = best else {
            return Err(GenerationError::UnreachableRooms { remaining: pending.len() });
        };
        passages.push(create_passage(grid, rooms, candidate));
    }
}

/// Replaces `best` with any strictly closer edge-tile pair between the two rooms.
fn consider_pair(rooms: &RoomGraph, room_a: RoomId, room_b: RoomId, best: &mut Option<Candidate>) {
    if room_a == room_b {
        return;
    }
    let (Some(a), Some(b)) = (rooms.get(room_a), rooms.get(room_b)) else {
        return;
    };
    if a.is_connected(room_b) {
        return;
    }

    for &tile_a in &a.edge_tiles {
        for &tile_b in &b.edge_tiles {
            let distance = tile_a.squared_distance(tile_b);
            if best.is_none_or(|current| distance < current.distance) {
                *best = Some(Candidate { distance, room_a, room_b, tile_a, tile_b });
            }
        }
    }
}

fn create_passage(grid: &mut Grid, rooms: &mut RoomGraph, candidate: Candidate) -> Passage {
    rooms.connect(candidate.room_a, candidate.room_b);

    for point in line(candidate.tile_a, candidate.tile_b) {
        carve_disc(grid, point, PASSAGE_RADIUS);
    }

    let room_a = rooms.ordinal(candidate.room_a).unwrap_or_default();
    let room_b = rooms.ordinal(candidate.room_b).unwrap_or_default();
    log::debug!(
        "carved passage room {room_a} {:?} -> room {room_b} {:?} (distance^2 {})",
        candidate.tile_a,
        candidate.tile_b,
        candidate.distance
    );

    Passage {
        room_a,
        room_b,
        tile_a: candidate.tile_a,
        tile_b: candidate.tile_b,
        world_a: tile_to_world_point(candidate.tile_a, grid.width(), grid.height()),
        world_b: tile_to_world_point(candidate.tile_b, grid.width(), grid.height()),
    }
}

fn carve_disc(grid: &mut Grid, center: Coord, radius: i32) {
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                grid.set(Coord::new(center.x + dx, center.y + dy), Cell::Floor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::regions::regions;

    fn graph_for(grid: &Grid) -> RoomGraph {
        RoomGraph::from_regions(regions(grid, Cell::Floor), grid)
    }

    #[test]
    fn disc_of_radius_one_is_a_plus_shape_clipped_to_the_grid() {
        let mut grid = Grid::filled(3, 3, Cell::Wall);
        carve_disc(&mut grid, Coord::new(0, 0), 1);
        assert_eq!(grid.count(Cell::Floor), 3);
        assert_eq!(grid.get(Coord::new(1, 1)), Some(Cell::Wall));

        let mut grid = Grid::filled(3, 3, Cell::Wall);
        carve_disc(&mut grid, Coord::new(1, 1), 1);
        assert_eq!(grid.count(Cell::Floor), 5);
    }

    #[test]
    fn nearest_edge_pair_wins_with_first_encountered_on_ties() {
        let grid = Grid::from_rows(&[
            "###########", //
            "#..#..#####",
            "#..#..#####",
            "###########",
        ]);
        let rooms = graph_for(&grid);
        let ids = rooms.ids().to_vec();
        let mut best = None;
        consider_pair(&rooms, ids[0], ids[1], &mut best);

        let best = best.expect("two rooms with edge tiles always pair up");
        assert_eq!(best.distance, 4);
        assert_eq!(best.tile_a, Coord::new(2, 1));
        assert_eq!(best.tile_b, Coord::new(4, 1));
    }

    #[test]
    fn connected_rooms_are_not_candidates() {
        let grid = Grid::from_rows(&["#######", "#.#.#.#", "#######"]);
        let mut rooms = graph_for(&grid);
        let ids = rooms.ids().to_vec();
        rooms.connect(ids[0], ids[1]);

        let mut best = None;
        consider_pair(&rooms, ids[0], ids[1], &mut best);
        consider_pair(&rooms, ids[2], ids[2], &mut best);
        assert_eq!(best, None);
    }

    #[test]
    fn single_room_needs_no_passages() {
        let mut grid = Grid::from_rows(&["#####", "#...#", "#####"]);
        let mut rooms = graph_for(&grid);
        let passages =
            connect_closest_rooms(&mut grid, &mut rooms).expect("one room is trivially connected");
        assert!(passages.is_empty());
        assert!(rooms.all_accessible());
    }

    #[test]
    fn isolated_pairs_are_bridged_back_to_the_main_room() {
        // Two tight clusters far apart: the first pass links each room with its
        // neighbour, the second pass joins the clusters.
        let mut grid = Grid::from_rows(&[
            "##########################", //
            "#....#..#############.#..#",
            "#....#..#############.#..#",
            "#....#..#############.#..#",
            "##########################",
        ]);
        let mut rooms = graph_for(&grid);
        assert_eq!(rooms.len(), 4);

        let passages = connect_closest_rooms(&mut grid, &mut rooms).expect("rooms connect");
        assert!(rooms.all_accessible());
        assert_eq!(passages.len(), 3, "two local links plus one bridge");
        assert_eq!(regions(&grid, Cell::Floor).len(), 1, "carving leaves one open region");
    }
}
