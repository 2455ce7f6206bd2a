//! Shared configuration types for CLI commands

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Player};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

/// Player token as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

/// Side to move when none was given: X unless X is already a mark ahead.
pub fn infer_to_move(board: &Board) -> Player {
    let count = board.piece_count();
    if count.x > count.o {
        Player::O
    } else {
        Player::X
    }
}
