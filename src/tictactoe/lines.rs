//! Winning line analysis for N x N boards

use super::{
    board::{Board, Cell, Coord, Player},
    game::GameOutcome,
};

/// One of the canonical winning lines of an N x N board.
///
/// Only full rows, full columns and the two main diagonals count, whatever
/// the board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Top-left to bottom-right
    MainDiagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
    Row(usize),
    Column(usize),
}

impl Line {
    /// All `2 * size + 2` lines: both diagonals, then rows, then columns.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        [Line::MainDiagonal, Line::AntiDiagonal]
            .into_iter()
            .chain((0..size).map(Line::Row))
            .chain((0..size).map(Line::Column))
    }

    /// Coordinates along the line, in scan order.
    pub fn coords(self, size: usize) -> impl Iterator<Item = Coord> {
        (0..size).map(move |i| match self {
            Line::MainDiagonal => Coord::new(i, i),
            Line::AntiDiagonal => Coord::new(size - 1 - i, i),
            Line::Row(row) => Coord::new(row, i),
            Line::Column(col) => Coord::new(i, col),
        })
    }

    /// Cells along the line, in scan order.
    pub fn cells(self, board: &Board) -> impl Iterator<Item = Cell> + '_ {
        self.coords(board.size()).map(move |coord| board.get(coord))
    }
}

/// Utility for scanning the winning lines of a board
pub struct LineScanner;

impl LineScanner {
    /// The player holding every cell of `line`, if any
    pub fn owner(board: &Board, line: Line) -> Option<Player> {
        let mut cells = line.cells(board);
        let first = cells.next()?.to_player()?;
        let target = first.to_cell();
        cells.all(|cell| cell == target).then_some(first)
    }

    /// Game result: the owner of the first completed line, a draw when the
    /// board is full, or `None` while play continues.
    pub fn winner(board: &Board) -> Option<GameOutcome> {
        if let Some(player) = Line::all(board.size()).find_map(|line| Self::owner(board, line)) {
            return Some(GameOutcome::Win(player));
        }

        if board.has_empty_cell() {
            None
        } else {
            Some(GameOutcome::Draw)
        }
    }
}
