//! Search configuration and difficulty levels

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::heuristic::HeuristicKind;
use crate::{
    error::{Error, Result},
    tictactoe::Player,
};

/// Depth value meaning "search until every leaf is a finished game".
pub const UNLIMITED_DEPTH: u32 = 0;

/// Difficulty presets offered to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Three plies of lookahead
    Easy,
    /// Six plies of lookahead
    Hard,
    /// Full game-tree solve
    #[default]
    Expert,
}

impl Difficulty {
    pub fn max_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Hard => 6,
            Difficulty::Expert => UNLIMITED_DEPTH,
        }
    }

    /// Selector used on the request wire (`AI1`, `AI2`, `AI3`).
    pub fn wire_name(self) -> &'static str {
        match self {
            Difficulty::Easy => "AI1",
            Difficulty::Hard => "AI2",
            Difficulty::Expert => "AI3",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai1" | "easy" => Ok(Difficulty::Easy),
            "ai2" | "hard" => Ok(Difficulty::Hard),
            "ai3" | "expert" => Ok(Difficulty::Expert),
            _ => Err(Error::ParseDifficulty {
                input: s.to_string(),
                expected: "AI1/easy, AI2/hard, AI3/expert".to_string(),
            }),
        }
    }
}

/// Configuration for one move search.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::search::{Difficulty, SearchConfig};
/// use tictactoe_ai::tictactoe::Player;
///
/// let config = SearchConfig::new(3, Player::O).with_difficulty(Difficulty::Hard);
/// assert_eq!(config.max_depth, 6);
/// assert!(config.pruning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Board size N
    pub size: usize,
    /// Plies searched below the root; 0 searches to the end of the game
    pub max_depth: u32,
    /// Side to move at the root
    pub to_move: Player,
    /// Leaf scoring strategy
    pub heuristic: HeuristicKind,
    /// Alpha-beta cut-offs below the root
    pub pruning: bool,
}

impl SearchConfig {
    /// Create a configuration with unlimited depth, line-potential scoring
    /// and pruning enabled.
    pub fn new(size: usize, to_move: Player) -> Self {
        Self {
            size,
            max_depth: UNLIMITED_DEPTH,
            to_move,
            heuristic: HeuristicKind::default(),
            pruning: true,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        self.with_max_depth(difficulty.max_depth())
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_depth == UNLIMITED_DEPTH
    }
}
