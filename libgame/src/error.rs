use thiserror::Error;

use crate::pos::Position;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {rows}x{cols}, both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("expected {expected} cells, got {got}")]
    CellCountMismatch { expected: usize, got: usize },

    #[error("invalid cell value {value} at {position}, expected 0 or 1")]
    InvalidCellValue { position: Position, value: u8 },

    #[error("position {position} is outside of the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("invalid birth rate {0}, expected a probability within [0, 1]")]
    InvalidBirthRate(f64),

    #[error("initial grid is {got_rows}x{got_cols} but the configuration asks for {rows}x{cols}")]
    InitialGridMismatch {
        rows: usize,
        cols: usize,
        got_rows: usize,
        got_cols: usize,
    },

    /// The neighbor counter was built for a different grid shape. Never raised through
    /// the engine's constructors, so seeing this means an internal invariant broke.
    #[error("neighbor counter expects a {rows}x{cols} grid, got {got_rows}x{got_cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        got_rows: usize,
        got_cols: usize,
    },
}
