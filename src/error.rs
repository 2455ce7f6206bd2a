//! Error types for the tic-tac-toe engine

use thiserror::Error;

/// Why a move was rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    Occupied,
    OutOfRange,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::Occupied => write!(f, "is already occupied"),
            MoveRejection::OutOfRange => write!(f, "is outside the board"),
        }
    }
}

/// Main error type for the engine crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: MoveRejection,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("game already over")]
    GameOver,

    #[error("invalid request: {message}")]
    InvalidQuery { message: String },

    #[error("board has {got} cells, which is not a square number, in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' (expected {expected})")]
    InvalidPlayerString { player: String, expected: String },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub(crate) fn query(message: impl Into<String>) -> Self {
        Error::InvalidQuery {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let err = Error::InvalidMove {
            row: 1,
            col: 2,
            reason: MoveRejection::Occupied,
        };
        assert_eq!(err.to_string(), "invalid move: cell (1, 2) is already occupied");
    }

    #[test]
    fn test_io_message_names_the_operation() {
        let err = Error::Io {
            operation: "write report to out.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(
            err.to_string(),
            "failed to write report to out.json: no such directory"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_configuration_helper() {
        let err = Error::configuration("size mismatch");
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("size mismatch"));
    }
}
