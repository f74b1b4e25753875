use crate::cell::{Cell, CellId, PathState};
use crate::direction::Direction;
use crate::grid::Grid;

/// Overlay glyphs fed to the painter. `dot` marks east/west path flow,
/// `colon` north/south flow and the path endpoints.
struct MarkTable {
    dot: char,
    colon: char,
}

const PATH_MARKS: MarkTable = MarkTable { dot: '.', colon: ':' };
const NO_MARKS: MarkTable = MarkTable { dot: ' ', colon: ' ' };

/// Rend la grille en ASCII, avec le chemin résolu si `solved` est vrai.
///
/// The block is `rows*2 + 1` lines of `cols*4 + 1` characters: a header
/// line, then a body and a floor line per maze row. The outer border
/// leaves an entrance gap above the top-left cell and an exit gap under
/// the bottom-right one. Never mutates the grid.
pub fn render(grid: &Grid, solved: bool) -> String {
    paint(grid, if solved { &PATH_MARKS } else { &NO_MARKS })
}

/// Walls-only variant: same shape, blank mark table, annotations never
/// show.
pub fn render_compact(grid: &Grid) -> String {
    paint(grid, &NO_MARKS)
}

fn on_path(cell: &Cell) -> bool {
    cell.state == PathState::Correct
}

fn points(cell: &Cell, direction: Direction) -> bool {
    cell.previous == Some(direction) || cell.next == Some(direction)
}

fn paint(grid: &Grid, marks: &MarkTable) -> String {
    let rows = grid.rows();
    let cols = grid.cols();
    let width = cols * 4 + 1;
    let mut canvas = vec![vec![' '; width]; rows * 2 + 1];

    // Top border: a roof over every cell but the entrance one.
    for col in 1..cols {
        for k in 1..=3 {
            canvas[0][col * 4 + k] = '_';
        }
    }
    for col in 2..cols {
        canvas[0][col * 4] = '_';
    }
    if on_path(grid.cell(CellId::new(0, 0))) {
        canvas[0][2] = marks.dot;
    }

    for row in 0..rows {
        for col in 0..cols {
            let cell = grid.cell(CellId::new(row, col));
            let body = row * 2 + 1;
            let floor = row * 2 + 2;
            let left = col * 4;

            canvas[body][left] = if cell.has_wall(Direction::West) || col == 0 {
                '|'
            } else if on_path(cell) && points(cell, Direction::West) {
                marks.dot
            } else {
                ' '
            };

            if on_path(cell) {
                if points(cell, Direction::West) {
                    canvas[body][left + 1] = marks.dot;
                }
                canvas[body][left + 2] =
                    if cell.previous.is_none() || points(cell, Direction::North) {
                        marks.colon
                    } else {
                        marks.dot
                    };
                if points(cell, Direction::East) {
                    canvas[body][left + 3] = marks.dot;
                }
            }

            // Floor join under the gap: drawn when the passage west of us
            // runs between two south walls, and always on the last row.
            canvas[floor][left] = if cell.has_wall(Direction::West) || col == 0 {
                '|'
            } else {
                let joined = match cell.neighbor(Direction::West) {
                    Some(west) => {
                        cell.has_wall(Direction::South)
                            && grid.cell(west).has_wall(Direction::South)
                    }
                    None => false,
                };
                if joined || row == rows - 1 {
                    '_'
                } else {
                    ' '
                }
            };

            if cell.has_wall(Direction::South) || row == rows - 1 {
                if row == rows - 1 && col == cols - 1 {
                    // Exit gap; marked only when the path ends here.
                    if on_path(cell) && cell.next.is_none() {
                        canvas[floor][left + 2] = marks.colon;
                    }
                } else {
                    for k in 1..=3 {
                        canvas[floor][left + k] = '_';
                    }
                }
            } else if on_path(cell) && points(cell, Direction::South) {
                canvas[floor][left + 2] = marks.colon;
            }

            if col == cols - 1 {
                canvas[body][left + 4] = '|';
                canvas[floor][left + 4] = '|';
            }
        }
    }

    let mut out = String::with_capacity((width + 1) * (rows * 2 + 1));
    for line in canvas {
        out.extend(line);
        out.push('\n');
    }
    out
}
