//! Initial noise: solid border, interior walls drawn with the configured density.

use rand_chacha::rand_core::Rng;

use crate::types::Cell;

use super::grid::Grid;
use super::seed::seeded_rng;

pub fn random_fill(width: usize, height: usize, seed: &str, fill_percent: u8) -> Grid {
    let mut rng = seeded_rng(seed);
    let mut grid = Grid::filled(width, height, Cell::Wall);
    for pos in grid.coords() {
        if grid.is_border(pos) {
            continue;
        }
        let roll = rng.next_u64() % 100;
        if roll >= u64::from(fill_percent) {
            grid.set(pos, Cell::Floor);
        }
    }
    grid
}
