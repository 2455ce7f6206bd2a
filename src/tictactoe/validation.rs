//! Board state validation logic
//!
//! The search trusts its input; these checks are for the outer layers that
//! receive boards from outside.

use super::board::{Board, Cell, Player};

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl Board {
    pub fn piece_count(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in self.cells() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Check that `to_move` could be on turn in an alternating game.
    ///
    /// Either player may have opened, so the side to move must have the same
    /// number of marks as the opponent or exactly one fewer.
    pub fn is_turn_consistent(&self, to_move: Player) -> bool {
        let count = self.piece_count();
        let (own, other) = match to_move {
            Player::X => (count.x, count.o),
            Player::O => (count.o, count.x),
        };
        own == other || own + 1 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_count() {
        let board = Board::from_string("XOX/.O./...").unwrap();
        assert_eq!(
            board.piece_count(),
            PieceCount {
                x: 2,
                o: 2,
                empty: 5
            }
        );
    }

    #[test]
    fn test_turn_consistency() {
        let board = Board::from_string("X../.../...").unwrap();
        assert!(board.is_turn_consistent(Player::O));
        assert!(!board.is_turn_consistent(Player::X));

        let empty = Board::new(3).unwrap();
        assert!(empty.is_turn_consistent(Player::X));
        assert!(empty.is_turn_consistent(Player::O));

        let lopsided = Board::from_string("XXX/.../...").unwrap();
        assert!(!lopsided.is_turn_consistent(Player::O));
    }
}
