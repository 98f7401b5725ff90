//! Flat row-major cell buffer shared by every generation phase.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Coord};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self { width, height, cells: vec![cell; width * height] }
    }

    /// Builds a grid from text rows where `#` is wall and anything else is floor.
    /// Rows shorter than the first one are padded with wall.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Self::filled(width, height, Cell::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().take(width).enumerate() {
                if symbol != '#' {
                    grid.cells[y * width + x] = Cell::Floor;
                }
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn get(&self, pos: Coord) -> Option<Cell> {
        self.index(pos).map(|index| self.cells[index])
    }

    /// Reads a cell, treating everything outside the grid as solid rock.
    pub fn cell_or_wall(&self, pos: Coord) -> Cell {
        self.get(pos).unwrap_or(Cell::Wall)
    }

    /// Writes a cell; out-of-range writes are ignored and reported as `false`.
    pub fn set(&mut self, pos: Coord, cell: Cell) -> bool {
        match self.index(pos) {
            Some(index) => {
                self.cells[index] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_border(&self, pos: Coord) -> bool {
        pos.x == 0
            || pos.y == 0
            || pos.x as usize == self.width.saturating_sub(1)
            || pos.y as usize == self.height.saturating_sub(1)
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| (0..width).map(move |x| Coord::new(x as i32, y as i32)))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&candidate| candidate == cell).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Nested `1`/`0` rows, the shape handed to mesh builders.
    pub fn to_bit_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(|row| row.iter().map(|cell| cell.bit()).collect()).collect()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.cells.iter().map(|cell| cell.bit()));
        bytes
    }

    fn index(&self, pos: Coord) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reads_are_walls_and_writes_are_ignored() {
        let mut grid = Grid::filled(3, 2, Cell::Floor);
        assert_eq!(grid.cell_or_wall(Coord::new(-1, 0)), Cell::Wall);
        assert_eq!(grid.cell_or_wall(Coord::new(3, 0)), Cell::Wall);
        assert_eq!(grid.get(Coord::new(0, 2)), None);
        assert!(!grid.set(Coord::new(5, 5), Cell::Wall));
        assert_eq!(grid.count(Cell::Wall), 0);
    }

    #[test]
    fn from_rows_uses_row_major_layout() {
        let grid = Grid::from_rows(&["#..", "..#"]);
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(Coord::new(0, 0)), Some(Cell::Wall));
        assert_eq!(grid.get(Coord::new(2, 1)), Some(Cell::Wall));
        assert_eq!(grid.get(Coord::new(1, 1)), Some(Cell::Floor));
        assert_eq!(grid.to_bit_rows(), vec![vec![1, 0, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn coords_scan_rows_before_columns() {
        let grid = Grid::filled(2, 2, Cell::Wall);
        let coords: Vec<Coord> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn border_detection_covers_all_four_sides() {
        let grid = Grid::filled(4, 3, Cell::Wall);
        let border = grid.coords().filter(|&pos| grid.is_border(pos)).count();
        assert_eq!(border, 4 * 3 - 2);
    }
}
