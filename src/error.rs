//! Error types returned by the rule engine and its collaborators.

use crate::constants::{MAX_SIZE, MIN_SIZE};

/// Errors raised when building or restoring a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ConfigError {
    /// Board size outside `MIN_SIZE..=MAX_SIZE`.
    pub fn invalid_size(size: usize) -> Self {
        ConfigError::InvalidConfiguration(format!(
            "board size {size} is outside {MIN_SIZE}..={MAX_SIZE}"
        ))
    }
}

/// Reasons a move is rejected. A rejected move never changes the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("illegal move: point not empty")]
    Occupied,

    #[error("illegal move: suicide")]
    Suicide,

    #[error("illegal move: retakes ko")]
    KoViolation,

    #[error("illegal move: game is over")]
    GameOver,
}

/// Errors raised while parsing a GTP vertex such as `D4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VertexError {
    #[error("invalid vertex: {0:?}")]
    Malformed(String),

    #[error("vertex {vertex} is off a {size}x{size} board")]
    OffBoard { vertex: String, size: usize },

    #[error("point ({row}, {col}) is off a {size}x{size} board")]
    PointOffBoard { row: usize, col: usize, size: usize },
}
