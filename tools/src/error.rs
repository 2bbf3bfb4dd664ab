use connect4::MoveError;
use thiserror::Error;

/// Why a single input line could not be processed.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("malformed line: {0}")]
    Malformed(String),

    #[error(transparent)]
    Move(#[from] MoveError),
}

impl LineError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        LineError::Malformed(reason.into())
    }
}
