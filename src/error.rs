use thiserror::Error;

/// Failures surfaced by grid construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A maze needs at least one row and one column.
    #[error("invalid maze dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}
