//! Recursive position evaluation with alpha-beta pruning

use serde::{Deserialize, Serialize};

use super::heuristic::Heuristic;
use crate::{
    error::Result,
    tictactoe::{Board, Coord, Player},
};

/// Best-known bounds carried down the tree.
///
/// `alpha` is checked by maximizing nodes and tightened by minimizing ones;
/// `beta` the other way round. Bounds are copied into each child, so
/// siblings never share them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub alpha: Option<i64>,
    pub beta: Option<i64>,
}

impl Bounds {
    /// Record `best` as the running score of a node where `side` moves.
    ///
    /// Returns `true` when the remaining moves of that node can be skipped.
    /// Comparisons are non-strict (fail-soft): a branch that can only tie
    /// what the parent already has is cut as well.
    pub fn update(&mut self, side: Player, best: i64) -> bool {
        let cut = match side {
            Player::X => self.alpha.is_some_and(|alpha| best >= alpha),
            Player::O => self.beta.is_some_and(|beta| best <= beta),
        };
        if !cut {
            self.tighten(side, best);
        }
        cut
    }

    /// Move the bound `side` tightens towards `best`, without a cut-off test.
    ///
    /// The root uses this directly: it scores every move whatever the bounds
    /// say.
    pub fn tighten(&mut self, side: Player, best: i64) {
        match side {
            Player::X => {
                if self.beta.map_or(true, |beta| best > beta) {
                    self.beta = Some(best);
                }
            }
            Player::O => {
                if self.alpha.map_or(true, |alpha| best < alpha) {
                    self.alpha = Some(best);
                }
            }
        }
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes evaluated below the root
    pub nodes: u64,
    /// Nodes scored by the heuristic
    pub leaves: u64,
    /// Nodes that stopped before trying all their moves
    pub cutoffs: u64,
}

/// Shared, read-mostly state for one search.
pub struct SearchContext<'h> {
    max_depth: u32,
    pruning: bool,
    heuristic: &'h dyn Heuristic,
    pub stats: SearchStats,
}

impl<'h> SearchContext<'h> {
    pub fn new(max_depth: u32, pruning: bool, heuristic: &'h dyn Heuristic) -> Self {
        Self {
            max_depth,
            pruning,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }

    fn depth_exhausted(&self, depth: u32) -> bool {
        self.max_depth != 0 && depth >= self.max_depth
    }

    fn leaf_score(&mut self, board: &Board) -> i64 {
        self.stats.leaves += 1;
        self.heuristic.score(board, Player::X)
    }
}

/// One position in the game tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    to_move: Player,
    depth: u32,
    bounds: Bounds,
}

impl SearchNode {
    pub fn new(board: Board, to_move: Player, depth: u32, bounds: Bounds) -> Self {
        Self {
            board,
            to_move,
            depth,
            bounds,
        }
    }

    /// Empty cells in row-major order; this order breaks ties.
    pub fn available_moves(&self) -> Vec<Coord> {
        self.board.empty_cells()
    }

    /// Finished games and positions at the depth limit are not expanded.
    pub fn is_leaf(&self, ctx: &SearchContext<'_>) -> bool {
        self.board.is_terminal() || ctx.depth_exhausted(self.depth)
    }

    /// Score this position, consuming the node.
    ///
    /// Scores are from X's point of view: X picks the largest child score,
    /// O the smallest, and the first child wins ties.
    pub fn evaluate(mut self, ctx: &mut SearchContext<'_>) -> Result<i64> {
        ctx.stats.nodes += 1;

        if self.is_leaf(ctx) {
            return Ok(ctx.leaf_score(&self.board));
        }

        let mut best: Option<i64> = None;

        for coord in self.available_moves() {
            let child = SearchNode::new(
                self.board.apply_move(coord, self.to_move)?,
                self.to_move.opponent(),
                self.depth + 1,
                self.bounds,
            );
            let child_score = child.evaluate(ctx)?;

            let running = match best {
                Some(current) if !self.to_move.prefers(child_score, current) => current,
                _ => child_score,
            };
            best = Some(running);

            if ctx.pruning() && self.bounds.update(self.to_move, running) {
                ctx.stats.cutoffs += 1;
                break;
            }
        }

        match best {
            Some(score) => Ok(score),
            None => Ok(ctx.leaf_score(&self.board)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristic::LinePotential;

    fn evaluate(board: &str, to_move: Player, max_depth: u32) -> i64 {
        let heuristic = LinePotential;
        let mut ctx = SearchContext::new(max_depth, true, &heuristic);
        let node = SearchNode::new(
            Board::from_string(board).unwrap(),
            to_move,
            1,
            Bounds::default(),
        );
        node.evaluate(&mut ctx).unwrap()
    }

    #[test]
    fn test_maximizer_cuts_at_alpha() {
        let mut bounds = Bounds {
            alpha: Some(10),
            beta: None,
        };
        assert!(!bounds.update(Player::X, 5));
        assert_eq!(bounds.beta, Some(5));
        assert!(!bounds.update(Player::X, 3));
        assert_eq!(bounds.beta, Some(5));
        // Equal to alpha is enough
        assert!(bounds.update(Player::X, 10));
    }

    #[test]
    fn test_minimizer_cuts_at_beta() {
        let mut bounds = Bounds {
            alpha: None,
            beta: Some(-2),
        };
        assert!(!bounds.update(Player::O, 7));
        assert_eq!(bounds.alpha, Some(7));
        assert!(!bounds.update(Player::O, 1));
        assert_eq!(bounds.alpha, Some(1));
        assert!(bounds.update(Player::O, -2));
    }

    #[test]
    fn test_unset_bounds_never_cut() {
        let mut bounds = Bounds::default();
        assert!(!bounds.update(Player::X, 100));
        assert_eq!(bounds.beta, Some(100));
        assert_eq!(bounds.alpha, None);
    }

    #[test]
    fn test_tighten_ignores_the_cut_off_bound() {
        let mut bounds = Bounds {
            alpha: Some(10),
            beta: None,
        };
        // update would cut here; tighten only moves beta
        bounds.tighten(Player::X, 12);
        assert_eq!(bounds.beta, Some(12));
        bounds.tighten(Player::X, 4);
        assert_eq!(bounds.beta, Some(12));
        assert_eq!(bounds.alpha, Some(10));

        bounds.tighten(Player::O, -3);
        assert_eq!(bounds.alpha, Some(-3));
    }

    #[test]
    fn test_terminal_node_is_leaf() {
        // X has already won: heuristic of the finished board
        assert_eq!(evaluate("XXX/OO./...", Player::O, 0), 111);
    }

    #[test]
    fn test_depth_limit_scores_heuristic() {
        // Depth 1 is already at a limit of 1
        assert_eq!(evaluate("X../.../...", Player::O, 1), 3);
    }

    #[test]
    fn test_forced_win_for_side_to_move() {
        // O completes the top row
        assert!(evaluate("OO./XX./X..", Player::O, 0) < 0);
        // X completes the middle row
        assert!(evaluate("OO./XX./X..", Player::X, 0) > 0);
    }

    #[test]
    fn test_stats_are_counted() {
        let heuristic = LinePotential;
        let mut ctx = SearchContext::new(2, true, &heuristic);
        let node = SearchNode::new(Board::new(3).unwrap(), Player::X, 1, Bounds::default());
        node.evaluate(&mut ctx).unwrap();
        // Root of this subtree plus nine leaves
        assert_eq!(ctx.stats.nodes, 10);
        assert_eq!(ctx.stats.leaves, 9);
        assert_eq!(ctx.stats.cutoffs, 0);
    }
}
