use crate::cell::{Cell, CellId};
use crate::direction::Direction;
use crate::error::MazeError;

/// Grille du labyrinthe : toutes les cellules, possédées à plat en
/// ordre ligne par ligne.
///
/// The grid is the only mutation path for links and walls. An edge's
/// wall flag is stored on both endpoints and every mutation updates the
/// two sides together, so the maze can never disagree with itself about
/// a shared wall.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a fully walled rows×cols grid.
    ///
    /// Every pair of adjacent cells is linked (North/South, East/West)
    /// with the wall in place, so a fresh grid is a valid maze with no
    /// passages at all.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(CellId::new(row, col)));
            }
        }

        let mut grid = Self { rows, cols, cells };
        for row in 0..rows {
            for col in 0..cols {
                let id = CellId::new(row, col);
                if row > 0 {
                    grid.link(id, CellId::new(row - 1, col), Direction::North);
                }
                if col > 0 {
                    grid.link(id, CellId::new(row, col - 1), Direction::West);
                }
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, id: CellId) -> usize {
        // Ids from another grid are a caller bug, not a runtime condition.
        debug_assert!(
            id.row < self.rows && id.col < self.cols,
            "cell ({}, {}) outside a {}x{} grid",
            id.row,
            id.col,
            self.rows,
            self.cols
        );
        id.row * self.cols + id.col
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[self.offset(id)]
    }

    pub(crate) fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        let offset = self.offset(id);
        &mut self.cells[offset]
    }

    /// Ids of every cell, row-major.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        let cols = self.cols;
        (0..self.cells.len()).map(move |k| CellId::new(k / cols, k % cols))
    }

    /// Lie `a` et `b` dans les deux sens le long de `direction`.
    ///
    /// Any link either endpoint already had on the affected side is
    /// severed symmetrically first, dropping the stale edge's wall
    /// bookkeeping. The new edge starts walled.
    pub fn link(&mut self, a: CellId, b: CellId, direction: Direction) {
        self.unlink(a, direction);
        self.unlink(b, direction.opposite());
        self.cell_mut(a).set_neighbor(direction, b);
        self.cell_mut(b).set_neighbor(direction.opposite(), a);
    }

    fn unlink(&mut self, id: CellId, direction: Direction) {
        if let Some(other) = self.cell(id).neighbor(direction) {
            self.cell_mut(other).clear_neighbor(direction.opposite());
            self.cell_mut(id).clear_neighbor(direction);
        }
    }

    /// Pose ou retire le mur entre `id` et sa voisine.
    ///
    /// Both endpoints see the change. Without a neighbor on that side
    /// there is no edge to alter and the call does nothing.
    pub fn set_wall(&mut self, id: CellId, direction: Direction, blocked: bool) {
        if let Some(other) = self.cell(id).neighbor(direction) {
            self.cell_mut(id).set_wall_flag(direction, blocked);
            self.cell_mut(other)
                .set_wall_flag(direction.opposite(), blocked);
        }
    }

    pub fn has_wall(&self, id: CellId, direction: Direction) -> bool {
        self.cell(id).has_wall(direction)
    }

    pub fn unblocked_neighbors(&self, id: CellId) -> Vec<(Direction, CellId)> {
        self.cell(id).unblocked_neighbors()
    }

    /// Wipes every solve annotation back to its default.
    pub(crate) fn reset_paths(&mut self) {
        for cell in &mut self.cells {
            cell.reset_path();
        }
    }
}
