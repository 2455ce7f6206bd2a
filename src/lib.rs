//! Minimax move engine for N×N tic-tac-toe
//!
//! This crate provides:
//! - Board model, winning-line scanner and game records for any board size
//! - Depth-limited minimax with alpha-beta pruning and a line-potential
//!   heuristic
//! - Difficulty presets mapping to search depths
//! - A query-string request / JSON response layer for game clients
//! - CLI commands for solving positions, answering requests and playing
//!   matches

pub mod cli;
pub mod error;
pub mod protocol;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Difficulty, RootCoordinator, SearchConfig, SearchReport, best_move};
pub use tictactoe::{Board, Cell, Coord, Game, GameOutcome, Player};
