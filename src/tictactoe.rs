//! N x N tic-tac-toe rules: board, winning lines and game records

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{Board, Cell, Coord, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{Line, LineScanner};
pub use validation::PieceCount;
