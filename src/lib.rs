pub mod cell;
pub mod direction;
pub mod error;
pub mod generator;
pub mod grid;
pub mod render;
pub mod solver;

pub use cell::{Cell, CellId, PathState};
pub use direction::Direction;
pub use error::MazeError;
pub use generator::{generate, generate_with};
pub use grid::Grid;
pub use render::{render, render_compact};
pub use solver::{solve, solve_with};
