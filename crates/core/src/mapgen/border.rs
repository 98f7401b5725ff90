//! Solid frame around the finished interior map.

use crate::types::{Cell, Coord};

use super::grid::Grid;

pub fn pad_with_border(interior: &Grid, border_size: usize) -> Grid {
    let mut padded = Grid::filled(
        interior.width() + border_size * 2,
        interior.height() + border_size * 2,
        Cell::Wall,
    );
    let offset = border_size as i32;
    for pos in interior.coords() {
        padded.set(Coord::new(pos.x + offset, pos.y + offset), interior.cell_or_wall(pos));
    }
    padded
}
