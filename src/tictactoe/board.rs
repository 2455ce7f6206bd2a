//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineScanner};
use crate::error::{Error, MoveRejection, Result};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Numeric value used by the search: 0 for empty, +1 for X, -1 for O.
    pub fn value(self) -> i64 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => -1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X maximizes the score, O minimizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// +1 for X, -1 for O
    pub fn sign(self) -> i64 {
        self.to_cell().value()
    }

    /// Whether `self` would rather have score `a` than `b` (X maximizes,
    /// O minimizes). Equal scores are not preferred.
    pub fn prefers(self, a: i64, b: i64) -> bool {
        match self {
            Player::X => a > b,
            Player::O => a < b,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A `(row, col)` position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N x N board stored row-major.
///
/// Boards are values: [`Board::apply_move`] returns a new board and leaves the
/// receiver untouched, so search nodes can own their positions outright.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns error if `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::configuration("board size must be at least 1"));
        }
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Build a board from `size * size` cells in row-major order.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self> {
        if size == 0 {
            return Err(Error::configuration("board size must be at least 1"));
        }
        if cells.len() != size * size {
            return Err(Error::configuration(format!(
                "expected {} cells for a {size}x{size} board, got {}",
                size * size,
                cells.len()
            )));
        }
        Ok(Board { size, cells })
    }

    /// Parse a board from its text form.
    ///
    /// Rows may be separated by `/` or whitespace, or not at all; the number
    /// of cells must be a square. `X`, `O` and `.` mark the cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_ai::tictactoe::{Board, Cell, Coord};
    ///
    /// let board = Board::from_string("XX./OO./...").unwrap();
    /// assert_eq!(board.size(), 3);
    /// assert_eq!(board.get(Coord::new(1, 0)), Cell::O);
    /// ```
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let size = chars.len().isqrt();
        if size == 0 || size * size != chars.len() {
            return Err(Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = Vec::with_capacity(chars.len());
        for (position, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position,
                context: s.to_string(),
            })?;
            cells.push(cell);
        }

        Board::from_cells(size, cells)
    }

    /// Build a board from `(row, col, cell)` triples that must cover every
    /// cell exactly once.
    pub fn from_triples<I>(size: usize, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, Cell)>,
    {
        if size == 0 {
            return Err(Error::configuration("board size must be at least 1"));
        }
        let mut slots: Vec<Option<Cell>> = vec![None; size * size];

        for (row, col, cell) in triples {
            if row >= size || col >= size {
                return Err(Error::configuration(format!(
                    "cell ({row}, {col}) does not fit a {size}x{size} board"
                )));
            }
            let slot = &mut slots[row * size + col];
            if slot.is_some() {
                return Err(Error::configuration(format!(
                    "cell ({row}, {col}) is given more than once"
                )));
            }
            *slot = Some(cell);
        }

        let mut cells = Vec::with_capacity(slots.len());
        for (idx, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(cell) => cells.push(cell),
                None => {
                    return Err(Error::configuration(format!(
                        "cell ({}, {}) is missing from the board",
                        idx / size,
                        idx % size
                    )));
                }
            }
        }

        Board::from_cells(size, cells)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size).then(|| coord.row * self.size + coord.col)
    }

    /// Cell at `coord`. Panics if `coord` is off the board.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row * self.size + coord.col]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.index(coord)
            .is_some_and(|idx| self.cells[idx] == Cell::Empty)
    }

    /// All empty positions in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place `player` on an empty cell and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if the cell is off the board or taken.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, coord: Coord, player: Player) -> Result<Board> {
        let reject = |reason| Error::InvalidMove {
            row: coord.row,
            col: coord.col,
            reason,
        };
        let idx = self
            .index(coord)
            .ok_or_else(|| reject(MoveRejection::OutOfRange))?;
        if self.cells[idx] != Cell::Empty {
            return Err(reject(MoveRejection::Occupied));
        }

        let mut next = self.clone();
        next.cells[idx] = player.to_cell();
        Ok(next)
    }

    /// Game result, or `None` while the game continues
    pub fn winner(&self) -> Option<GameOutcome> {
        LineScanner::winner(self)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
