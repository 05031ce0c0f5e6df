//! Immutable wall/open classification of the board.
//! This module owns bounds handling and the horizontal tunnel wrap.
//! It does not know about actors or collectibles.

use crate::types::{Cell, Coord};

#[derive(Clone, Debug)]
pub struct GridWorld {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridWorld {
    /// Builds a grid from row-major cells. Callers guarantee `cells.len() == width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Fails closed: anything outside the board reads as a wall.
    pub fn cell_at(&self, pos: Coord) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Wall;
        }
        self.cells[self.index(pos)]
    }

    pub fn is_open(&self, pos: Coord) -> bool {
        self.cell_at(pos) == Cell::Open
    }

    /// Tunnel wrap on the horizontal axis: `x mod width`, always non-negative.
    pub fn wrap_column(&self, x: i32) -> i32 {
        x.rem_euclid(self.width as i32)
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| {
                let pos = Coord::new(x as i32, y as i32);
                self.is_open(pos).then_some(pos)
            })
        })
    }

    /// One string per row, `#` for wall and `.` for open.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Wall => '#',
                        Cell::Open => '.',
                    })
                    .collect()
            })
            .collect()
    }

    fn index(&self, pos: Coord) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_grid() -> GridWorld {
        // 4x3, open everywhere except the middle row's inner cells.
        let mut cells = vec![Cell::Open; 12];
        cells[5] = Cell::Wall;
        cells[6] = Cell::Wall;
        GridWorld::from_cells(4, 3, cells)
    }

    #[test]
    fn rows_outside_the_board_are_never_open() {
        let grid = ring_grid();
        for x in -5..10 {
            assert!(!grid.is_open(Coord::new(x, -1)));
            assert!(!grid.is_open(Coord::new(x, 3)));
            assert!(!grid.is_open(Coord::new(x, 40)));
        }
    }

    #[test]
    fn columns_outside_the_board_fail_closed_until_wrapped() {
        let grid = ring_grid();
        assert!(!grid.is_open(Coord::new(-1, 0)));
        assert!(!grid.is_open(Coord::new(4, 0)));
        assert!(grid.is_open(Coord::new(grid.wrap_column(-1), 0)));
    }

    #[test]
    fn wrap_column_is_modular_in_both_directions() {
        let grid = ring_grid();
        assert_eq!(grid.wrap_column(-1), 3);
        assert_eq!(grid.wrap_column(4), 0);
        assert_eq!(grid.wrap_column(2), 2);
        assert_eq!(grid.wrap_column(-9), 3);
    }

    #[test]
    fn open_cells_walks_row_major_and_skips_walls() {
        let grid = ring_grid();
        let open: Vec<Coord> = grid.open_cells().collect();
        assert_eq!(open.len(), 10);
        assert_eq!(open[0], Coord::new(0, 0));
        assert!(!open.contains(&Coord::new(1, 1)));
        assert_eq!(open.last().copied(), Some(Coord::new(3, 2)));
    }

    #[test]
    fn rows_render_walls_and_open_cells() {
        assert_eq!(ring_grid().rows(), vec!["....", ".##.", "...."]);
    }
}
