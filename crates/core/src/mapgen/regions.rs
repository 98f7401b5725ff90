//! Connected-component extraction over edge-sharing cells.

use std::collections::VecDeque;

use crate::types::{Cell, Coord};

use super::grid::Grid;

/// Maximal 4-connected set of same-state cells, in flood-fill discovery order.
pub type Region = Vec<Coord>;

/// Every region of `cell`, discovered in row-major scan order.
pub fn regions(grid: &Grid, cell: Cell) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut found = Vec::new();

    for pos in grid.coords() {
        let index = visit_index(grid, pos);
        if visited[index] || grid.get(pos) != Some(cell) {
            continue;
        }
        let region = flood_fill(grid, pos, &mut visited);
        found.push(region);
    }
    found
}

/// Breadth-first fill from `start`, marking every collected tile in `visited`.
fn flood_fill(grid: &Grid, start: Coord, visited: &mut [bool]) -> Region {
    let Some(cell) = grid.get(start) else {
        return Vec::new();
    };

    let mut tiles = Vec::new();
    let mut open = VecDeque::from([start]);
    visited[visit_index(grid, start)] = true;

    while let Some(tile) = open.pop_front() {
        tiles.push(tile);
        for next in tile.orthogonal_neighbors() {
            if grid.get(next) != Some(cell) {
                continue;
            }
            let index = visit_index(grid, next);
            if visited[index] {
                continue;
            }
            visited[index] = true;
            open.push_back(next);
        }
    }
    tiles
}

fn visit_index(grid: &Grid, pos: Coord) -> usize {
    (pos.y as usize) * grid.width() + (pos.x as usize)
}

/// Rewrites every region smaller than `threshold` to `replacement`.
/// Returns the regions that survived, in discovery order.
pub fn replace_small_regions(
    grid: &mut Grid,
    cell: Cell,
    threshold: usize,
    replacement: Cell,
) -> Vec<Region> {
    let mut survivors = Vec::new();
    for region in regions(grid, cell) {
        if region.len() < threshold {
            for &tile in &region {
                grid.set(tile, replacement);
            }
        } else {
            survivors.push(region);
        }
    }
    survivors
}
