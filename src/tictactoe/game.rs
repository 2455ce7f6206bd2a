//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Coord, Player};
use crate::error::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub coord: Coord,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub first_player: Player,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game on an empty board
    pub fn new(size: usize, first_player: Player) -> Result<Self> {
        Ok(Game {
            initial: Board::new(size)?,
            first_player,
            moves: Vec::new(),
            outcome: None,
        })
    }

    /// Player whose turn it is
    pub fn to_move(&self) -> Player {
        self.moves
            .last()
            .map_or(self.first_player, |m| m.player.opponent())
    }

    /// Play a move for the side to move
    pub fn play(&mut self, coord: Coord) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let player = self.to_move();
        let next = self.current_state()?.apply_move(coord, player)?;
        self.moves.push(Move { coord, player });
        self.outcome = next.winner();

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid, which indicates
    /// corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board> {
        let mut state = self.initial.clone();
        for m in self.moves.iter().take(end_index) {
            state = state.apply_move(m.coord, m.player)?;
        }
        Ok(state)
    }

    /// Get current board state
    pub fn current_state(&self) -> Result<Board> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, starting with the initial board
    pub fn state_sequence(&self) -> Result<Vec<Board>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(self.initial.clone());

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_until_win() {
        let mut game = Game::new(3, Player::X).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Coord::new(row, col)).unwrap();
        }

        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert!(matches!(game.play(Coord::new(2, 2)), Err(Error::GameOver)));
        assert_eq!(game.state_sequence().unwrap().len(), 6);
    }

    #[test]
    fn test_turns_alternate_from_first_player() {
        let mut game = Game::new(3, Player::O).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.play(Coord::new(1, 1)).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.moves[0].player, Player::O);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut game = Game::new(3, Player::X).unwrap();
        game.play(Coord::new(0, 0)).unwrap();
        assert!(game.play(Coord::new(0, 0)).is_err());
        assert_eq!(game.moves.len(), 1);
    }
}
