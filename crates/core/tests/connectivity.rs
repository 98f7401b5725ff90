use cavegen::mapgen::{Grid, process_map, regions};
use cavegen::{Cell, Coord, GenerationError, RegionThresholds};

fn three_blocks() -> Grid {
    let mut grid = Grid::filled(20, 20, Cell::Wall);
    for (left, top) in [(2, 2), (12, 2), (2, 12)] {
        for y in top..top + 4 {
            for x in left..left + 4 {
                grid.set(Coord::new(x, y), Cell::Floor);
            }
        }
    }
    grid
}

#[test]
fn disjoint_blocks_end_up_reachable_through_carved_tunnels() {
    let mut grid = three_blocks();
    assert_eq!(regions(&grid, Cell::Floor).len(), 3);

    let thresholds = RegionThresholds { wall: 50, room: 10 };
    let processed = process_map(&mut grid, thresholds).expect("all three blocks survive");

    assert_eq!(processed.rooms.len(), 3);
    assert!(processed.rooms.all_accessible());
    assert_eq!(processed.passages.len(), 2, "each outlying block links straight to the main one");

    assert!(
        (2..6).any(|y| grid.get(Coord::new(8, y)) == Some(Cell::Floor)),
        "a tunnel crosses the vertical wall strip"
    );
    assert!(
        (2..6).any(|x| grid.get(Coord::new(x, 8)) == Some(Cell::Floor)),
        "a tunnel crosses the horizontal wall strip"
    );
    assert_eq!(regions(&grid, Cell::Floor).len(), 1, "the whole map is one open space");
}

#[test]
fn passages_report_both_endpoints_in_their_rooms() {
    let mut grid = three_blocks();
    let original = grid.clone();
    let processed =
        process_map(&mut grid, RegionThresholds { wall: 50, room: 10 }).expect("rooms survive");

    for passage in &processed.passages {
        assert_eq!(original.get(passage.tile_a), Some(Cell::Floor));
        assert_eq!(original.get(passage.tile_b), Some(Cell::Floor));
        assert_ne!(passage.room_a, passage.room_b);
        assert!(passage.room_a == 0 || passage.room_b == 0, "both links attach to the main block");
    }
}

#[test]
fn undersized_blocks_leave_no_viable_rooms() {
    let mut grid = three_blocks();
    let err = process_map(&mut grid, RegionThresholds::default()).expect_err("16-tile blocks");
    assert_eq!(err, GenerationError::NoViableRooms { room_threshold_size: 50 });
    assert_eq!(grid.count(Cell::Floor), 0, "every closet was filled in");
}

#[test]
fn sliver_walls_become_floor_inside_a_large_room() {
    let mut grid = Grid::filled(20, 20, Cell::Wall);
    for y in 1..19 {
        for x in 1..19 {
            grid.set(Coord::new(x, y), Cell::Floor);
        }
    }
    for x in 8..11 {
        grid.set(Coord::new(x, 9), Cell::Wall);
    }

    let processed = process_map(&mut grid, RegionThresholds::default()).expect("big room survives");
    assert_eq!(processed.rooms.len(), 1);
    assert_eq!(grid.count(Cell::Floor), 18 * 18);
}
