use thiserror::Error;

/// Reasons a move sequence cannot be played out on a 7x6 board.
///
/// `ply` is 1-based: the first move of a sequence is ply 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid move {found:?} at ply {ply}, expected a column digit 0-6")]
    InvalidMove { ply: usize, found: char },

    #[error("column {column} is already full at ply {ply}")]
    ColumnFull { ply: usize, column: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0:?} is not a column, expected a single digit 0-6")]
pub struct ParseActionError(pub String);
