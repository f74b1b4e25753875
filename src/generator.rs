use rand::seq::IndexedRandom;
use rand::Rng;

use crate::cell::CellId;
use crate::grid::Grid;

/// Creuse un labyrinthe parfait dans la grille avec l'aléa du processus.
pub fn generate(grid: &mut Grid) {
    generate_with(grid, &mut rand::rng());
}

/// Randomized depth-first carving (the recursive backtracker).
///
/// Starts from a uniformly random cell and walks the grid depth-first,
/// knocking down one wall per descent. Runs on an explicit stack rather
/// than the call stack, whose depth would otherwise reach rows×cols on
/// an unlucky corridor. Afterwards the unwalled edges form a spanning
/// tree: every cell is reachable and there are no loops.
pub fn generate_with<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let start = CellId::new(
        rng.random_range(0..grid.rows()),
        rng.random_range(0..grid.cols()),
    );

    let cols = grid.cols();
    let mut visited = vec![false; grid.rows() * cols];
    visited[start.row * cols + start.col] = true;

    let mut stack = vec![start];
    while let Some(&current) = stack.last() {
        // Unvisited neighbors are re-queried on every step: a deeper
        // descent may have claimed one since the last look.
        let candidates: Vec<(_, CellId)> = grid
            .cell(current)
            .neighbors()
            .filter(|&(_, id)| !visited[id.row * cols + id.col])
            .collect();

        match candidates.choose(rng) {
            Some(&(direction, next)) => {
                grid.set_wall(current, direction, false);
                visited[next.row * cols + next.col] = true;
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }
}
