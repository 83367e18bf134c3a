// error.rs - Errors raised while building or loading grids

use thiserror::Error;

/// Everything that can go wrong outside the (total) engine itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell value {value} at ({x}, {y}) is not 0 or 1")]
    InvalidCell { value: u8, x: usize, y: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("unexpected character {found:?} at line {line}, column {column}")]
    Parse { line: usize, column: usize, found: char },

    #[error("no pattern named {0:?}")]
    UnknownPattern(String),

    #[error("a {width}x{height} grid is too large")]
    TooLarge { width: usize, height: usize },

    #[error("row task {row} did not complete: {reason}")]
    RowTask { row: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, GridError>;
