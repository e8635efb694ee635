//! Error types for the foxsheep crate

use thiserror::Error;

/// Main error type for the foxsheep crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board diagram must have {expected} rows, got {got}")]
    InvalidBoardHeight { expected: usize, got: usize },

    #[error("board diagram row {row} must have {expected} cells, got {got}")]
    InvalidBoardWidth {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("board must contain exactly one fox, found {found}")]
    FoxCount { found: usize },

    #[error("border cell at row {row}, column {col} must be disabled")]
    OpenBorder { row: usize, col: usize },

    #[error("invalid side '{input}' (expected 'fox' or 'sheep')")]
    ParseSide { input: String },

    #[error("search cancelled")]
    SearchCancelled,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
