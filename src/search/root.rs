//! Root of the search: scores every legal move and picks one

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::{
    config::SearchConfig,
    heuristic::Heuristic,
    node::{Bounds, SearchContext, SearchNode, SearchStats},
};
use crate::{
    error::{Error, Result},
    tictactoe::{Board, Coord, Player},
};

/// Score of one candidate move at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub coord: Coord,
    pub score: i64,
}

/// Everything the root learned about a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub to_move: Player,
    pub chosen: Coord,
    pub best_score: i64,
    /// One entry per empty cell, in row-major order
    pub scores: Vec<MoveScore>,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn score_values(&self) -> Vec<i64> {
        self.scores.iter().map(|s| s.score).collect()
    }
}

/// Drives the search from the real position.
///
/// Unlike interior nodes, the root never stops early: every first move gets
/// a score of its own. The bounds it tightens along the way only prune inside
/// the subtrees of later candidates.
pub struct RootCoordinator {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
}

impl RootCoordinator {
    pub fn new(config: SearchConfig) -> Self {
        let heuristic = config.heuristic.build();
        Self { config, heuristic }
    }

    /// Use a custom scoring strategy instead of the configured one
    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        Self { config, heuristic }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score every legal move and select the one to play.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when the board size differs
    /// from the configured size or the board has no empty cell.
    #[instrument(level = "debug", skip_all, fields(size = board.size(), to_move = %self.config.to_move, max_depth = self.config.max_depth))]
    pub fn analyse(&self, board: &Board) -> Result<SearchReport> {
        if board.size() != self.config.size {
            return Err(Error::configuration(format!(
                "board is {0}x{0} but the search is configured for {1}x{1}",
                board.size(),
                self.config.size
            )));
        }

        let to_move = self.config.to_move;
        let moves = board.empty_cells();
        if moves.is_empty() {
            return Err(Error::configuration("board has no empty cells to play"));
        }

        let mut ctx = SearchContext::new(
            self.config.max_depth,
            self.config.pruning,
            self.heuristic.as_ref(),
        );
        let mut bounds = Bounds::default();
        let mut scores: Vec<MoveScore> = Vec::with_capacity(moves.len());
        let mut best: Option<MoveScore> = None;

        for coord in moves {
            let child = SearchNode::new(
                board.apply_move(coord, to_move)?,
                to_move.opponent(),
                1,
                bounds,
            );
            let score = child.evaluate(&mut ctx)?;
            trace!(row = coord.row, col = coord.col, score, "root move scored");

            let candidate = MoveScore { coord, score };
            scores.push(candidate);

            // Strict comparison keeps the first move among equal scores
            if best.map_or(true, |b| to_move.prefers(score, b.score)) {
                best = Some(candidate);
            }

            if ctx.pruning() {
                if let Some(b) = best {
                    bounds.tighten(to_move, b.score);
                }
            }
        }

        let best = best.ok_or_else(|| Error::configuration("no move was scored"))?;
        let stats = ctx.stats;
        debug!(
            row = best.coord.row,
            col = best.coord.col,
            score = best.score,
            nodes = stats.nodes,
            leaves = stats.leaves,
            cutoffs = stats.cutoffs,
            "search finished"
        );

        Ok(SearchReport {
            to_move,
            chosen: best.coord,
            best_score: best.score,
            scores,
            stats,
        })
    }

    /// Only the move to play
    pub fn choose_move(&self, board: &Board) -> Result<Coord> {
        self.analyse(board).map(|report| report.chosen)
    }
}

/// One-shot search with a fresh coordinator.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::search::{best_move, SearchConfig};
/// use tictactoe_ai::tictactoe::{Board, Coord, Player};
///
/// let board = Board::from_string("XX./OO./...").unwrap();
/// let config = SearchConfig::new(3, Player::X).with_max_depth(3);
/// assert_eq!(best_move(&board, &config).unwrap(), Coord::new(0, 2));
/// ```
pub fn best_move(board: &Board, config: &SearchConfig) -> Result<Coord> {
    RootCoordinator::new(config.clone()).choose_move(board)
}
