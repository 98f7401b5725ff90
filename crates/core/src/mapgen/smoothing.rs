//! Majority-rule cellular automaton that turns fill noise into cave blobs.

use crate::types::{Cell, Coord};

use super::grid::Grid;

pub const SMOOTHING_ITERATIONS: usize = 5;

const NEIGHBOR_MAJORITY: usize = 4;

pub fn smooth(grid: &mut Grid) {
    for _ in 0..SMOOTHING_ITERATIONS {
        smooth_once(grid);
    }
}

/// One automaton step; every cell is judged against the grid as it was before the step.
pub fn smooth_once(grid: &mut Grid) {
    let previous = grid.clone();
    for pos in previous.coords() {
        let walls = surrounding_wall_count(&previous, pos);
        if walls > NEIGHBOR_MAJORITY {
            grid.set(pos, Cell::Wall);
        } else if walls < NEIGHBOR_MAJORITY {
            grid.set(pos, Cell::Floor);
        }
    }
}

pub fn surrounding_wall_count(grid: &Grid, pos: Coord) -> usize {
    let mut walls = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid.cell_or_wall(Coord::new(pos.x + dx, pos.y + dy)).is_wall() {
                walls += 1;
            }
        }
    }
    walls
}
