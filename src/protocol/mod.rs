//! Request/response layer around the search
//!
//! This is the boundary a game client talks to: it decodes a query-string
//! request, runs the search and encodes the chosen move as JSON.

pub mod query;
pub mod response;

use tracing::{debug, warn};

pub use query::{MAX_WIRE_SIZE, MoveRequest};
pub use response::{MoveResponse, decode_coord, encode_coord};

use crate::{error::Result, search::RootCoordinator};

/// Answer a decoded request.
///
/// Boards whose piece counts do not fit the side to move are searched
/// anyway; the engine trusts its input and only logs a warning.
pub fn answer(request: &MoveRequest, include_scores: bool) -> Result<MoveResponse> {
    if !request.board.is_turn_consistent(request.to_move) {
        let count = request.board.piece_count();
        warn!(
            x = count.x,
            o = count.o,
            to_move = %request.to_move,
            "piece counts do not match the side to move"
        );
    }

    debug!(
        size = request.size(),
        difficulty = %request.difficulty,
        "answering move request"
    );
    let report = RootCoordinator::new(request.search_config()).analyse(&request.board)?;
    Ok(MoveResponse::from_report(&report, include_scores))
}

/// Answer a raw query string.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::protocol::respond;
///
/// let query = "n=3&currentPlayer=1&board=001+011+020+102+112+120+200+210+220&AI=AI1";
/// let response = respond(query, false).unwrap();
/// assert_eq!(response.position, "02");
/// ```
pub fn respond(query: &str, include_scores: bool) -> Result<MoveResponse> {
    let request = MoveRequest::parse(query)?;
    answer(&request, include_scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::Difficulty,
        tictactoe::{Board, Coord, Player},
    };

    #[test]
    fn test_respond_blocks_or_wins() {
        // O to move with O O . on top: completing the row
        let board = Board::from_string("OO./XX./X..").unwrap();
        let request = MoveRequest::new(board, Player::O, Difficulty::Easy);
        let response = respond(&request.to_query().unwrap(), true).unwrap();
        assert_eq!(response.coord().unwrap(), Coord::new(0, 2));
        assert_eq!(response.scores.as_deref(), Some(&[-90, 101, 111, 110][..]));
    }

    #[test]
    fn test_inconsistent_turn_is_still_answered() {
        // X has one mark too many to be on turn
        let board = Board::from_string("XX./OO./X..").unwrap();
        let request = MoveRequest::new(board, Player::X, Difficulty::Easy);
        let response = answer(&request, false).unwrap();
        assert_eq!(response.coord().unwrap(), Coord::new(0, 2));
    }
}
