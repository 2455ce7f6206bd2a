//! Minimax move search with alpha-beta pruning
//!
//! The [`RootCoordinator`] scores every legal move of the real position by
//! expanding a tree of [`SearchNode`]s. Leaves are finished games or
//! positions at the configured depth limit, scored by a [`Heuristic`].

pub mod config;
pub mod heuristic;
pub mod node;
pub mod root;

pub use config::{Difficulty, SearchConfig, UNLIMITED_DEPTH};
pub use heuristic::{Heuristic, HeuristicKind, LinePotential, TerminalOutcome};
pub use node::{Bounds, SearchContext, SearchNode, SearchStats};
pub use root::{MoveScore, RootCoordinator, SearchReport, best_move};
