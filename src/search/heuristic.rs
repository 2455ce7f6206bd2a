//! Static board evaluation
//!
//! Scores are integers where positive favours X and negative favours O. A
//! [`Heuristic`] may be asked for the score from either player's point of
//! view; the search always asks from X's.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Cell, GameOutcome, Line, Player};

/// A pluggable scoring strategy for leaf positions.
pub trait Heuristic {
    /// Score `board` from `perspective`'s point of view.
    fn score(&self, board: &Board, perspective: Player) -> i64;
}

/// Line-potential scoring.
///
/// Every row, column and main diagonal that holds marks of only one player
/// contributes a power of ten that grows with the number of marks, so nearly
/// complete lines dominate. A completed line of length N is worth
/// `10^(N-1)`, which is why no separate terminal score is needed.
///
/// Arithmetic saturates: from N = 20 on a completed line no longer fits in
/// an `i64` and scores `i64::MAX` (or `i64::MIN`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePotential;

impl LinePotential {
    /// Contribution of a single line, scanned in order.
    ///
    /// The first mark seeds the accumulator with its sign; every later mark
    /// multiplies it by `10 * value`. A line holding both players is dead and
    /// scores zero.
    pub fn line_points(cells: impl IntoIterator<Item = Cell>) -> i64 {
        let mut seen_x = false;
        let mut seen_o = false;
        let mut partial: i64 = 0;

        for cell in cells {
            match cell {
                Cell::X => seen_x = true,
                Cell::O => seen_o = true,
                Cell::Empty => continue,
            }

            if seen_x && seen_o {
                return 0;
            }

            if partial == 0 {
                partial = cell.value();
            } else {
                partial = partial.saturating_mul(10 * cell.value());
            }
        }

        partial
    }

    /// Sum of all line contributions, from X's point of view.
    pub fn evaluate(board: &Board) -> i64 {
        Line::all(board.size())
            .map(|line| Self::line_points(line.cells(board)))
            .fold(0, i64::saturating_add)
    }
}

impl Heuristic for LinePotential {
    fn score(&self, board: &Board, perspective: Player) -> i64 {
        Self::evaluate(board).saturating_mul(perspective.sign())
    }
}

/// Win/draw/loss scoring: +1 for an X win, -1 for an O win, 0 otherwise.
///
/// Only meaningful with an unlimited depth, where every leaf is terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutcome;

impl Heuristic for TerminalOutcome {
    fn score(&self, board: &Board, perspective: Player) -> i64 {
        let score = match board.winner() {
            Some(GameOutcome::Win(player)) => player.sign(),
            Some(GameOutcome::Draw) | None => 0,
        };
        score * perspective.sign()
    }
}

/// Heuristic selection for a search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    /// Powers of ten per line owned by a single player
    #[default]
    LinePotential,
    /// +1 / 0 / -1 on finished games only
    TerminalOutcome,
}

impl HeuristicKind {
    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::LinePotential => Box::new(LinePotential),
            HeuristicKind::TerminalOutcome => Box::new(TerminalOutcome),
        }
    }
}
