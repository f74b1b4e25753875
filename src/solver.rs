use rand::Rng;

use crate::cell::{CellId, PathState};
use crate::direction::Direction;
use crate::grid::Grid;

/// Cherche un chemin de `start` à `goal` avec l'aléa du processus.
pub fn solve(grid: &mut Grid, start: CellId, goal: CellId) -> bool {
    solve_with(grid, start, goal, &mut rand::rng())
}

/// Backtracking search over the currently unwalled edges.
///
/// Every cell is first reset to `Unknown` with cleared `next`/`previous`
/// pointers, then the search walks out from `start`. On success each
/// cell along the path holds `next` toward the goal and `previous` back
/// toward the start (`None` at the respective endpoints) with state
/// `Correct`; explored dead ends are left `Incorrect`.
///
/// On a carved maze the unwalled edges form a spanning tree, so the
/// search cannot fail and the path it annotates is the unique tree path.
/// A `false` return therefore means the grid's passages are disconnected
/// — a carving or wall-mutation bug, not a user-facing condition.
///
/// Both ids must belong to `grid`; ids from another grid are a caller
/// bug and trip the arena's debug assertion.
pub fn solve_with<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: CellId,
    goal: CellId,
    rng: &mut R,
) -> bool {
    grid.reset_paths();
    search(grid, start, goal, None, rng)
}

// Recursion depth is bounded by the path explored, at worst the cell
// count; fine for terminal-sized grids. For grids well beyond that,
// rework this into an explicit stack of (cell, remaining candidates)
// frames, like the generator's loop.
fn search<R: Rng + ?Sized>(
    grid: &mut Grid,
    cell: CellId,
    goal: CellId,
    entered_from: Option<Direction>,
    rng: &mut R,
) -> bool {
    if cell == goal {
        let here = grid.cell_mut(cell);
        here.state = PathState::Correct;
        here.previous = entered_from;
        return true;
    }

    // Tentative; promoted back to Correct if the cell ends up on the path.
    grid.cell_mut(cell).state = PathState::Incorrect;

    let mut candidates: Vec<(Direction, CellId)> = grid
        .unblocked_neighbors(cell)
        .into_iter()
        .filter(|&(_, id)| grid.cell(id).state != PathState::Incorrect)
        .collect();

    while !candidates.is_empty() {
        let picked = rng.random_range(0..candidates.len());
        let (direction, next) = candidates.swap_remove(picked);

        if search(grid, next, goal, Some(direction.opposite()), rng) {
            let here = grid.cell_mut(cell);
            here.next = Some(direction);
            here.previous = entered_from;
            here.state = PathState::Correct;
            return true;
        }
    }

    let here = grid.cell_mut(cell);
    here.next = None;
    here.previous = None;
    false
}
