//! Query-string requests
//!
//! A request looks like
//! `n=3&currentPlayer=1&board=001+012+020+100+110+120+200+210+220&AI=AI1`:
//! the board is a list of `<row><col><player>` tokens where the player digit
//! is 0 (empty), 1 (X) or 2 (O), and `currentPlayer` uses the same 1/2 code.

use crate::{
    error::{Error, Result},
    search::{Difficulty, SearchConfig},
    tictactoe::{Board, Cell, Coord, Player},
};

/// Largest board whose coordinates fit the single-digit token format
pub const MAX_WIRE_SIZE: usize = 10;

/// A decoded move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub board: Board,
    pub to_move: Player,
    pub difficulty: Difficulty,
}

impl MoveRequest {
    pub fn new(board: Board, to_move: Player, difficulty: Difficulty) -> Self {
        Self {
            board,
            to_move,
            difficulty,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Decode a query string. A leading `?` is ignored, as are unknown
    /// parameters. A missing `AI` parameter means an unlimited search.
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_ai::protocol::MoveRequest;
    /// use tictactoe_ai::search::Difficulty;
    /// use tictactoe_ai::tictactoe::Player;
    ///
    /// let request = MoveRequest::parse(
    ///     "n=2&currentPlayer=2&board=001+010+100+110&AI=AI2",
    /// ).unwrap();
    /// assert_eq!(request.to_move, Player::O);
    /// assert_eq!(request.difficulty, Difficulty::Hard);
    /// assert_eq!(request.board.occupied_count(), 1);
    /// ```
    pub fn parse(query: &str) -> Result<Self> {
        let mut size = None;
        let mut player = None;
        let mut board = None;
        let mut difficulty = None;

        for pair in query.trim().trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(raw)?;
            match key {
                "n" => size = Some(value),
                "currentPlayer" => player = Some(value),
                "board" => board = Some(value),
                "AI" => difficulty = Some(value),
                _ => {}
            }
        }

        let size = required(size, "n")?;
        let size: usize = size
            .trim()
            .parse()
            .map_err(|_| Error::query(format!("board size '{size}' is not a number")))?;
        if size == 0 || size > MAX_WIRE_SIZE {
            return Err(Error::query(format!(
                "board size must be between 1 and {MAX_WIRE_SIZE}, got {size}"
            )));
        }

        let to_move = parse_player_code(&required(player, "currentPlayer")?)?;

        let tokens = required(board, "board")?;
        let triples = tokens
            .split_whitespace()
            .map(parse_triple)
            .collect::<Result<Vec<_>>>()?;
        let board = Board::from_triples(size, triples)?;

        let difficulty = match difficulty {
            Some(name) => name.parse()?,
            None => Difficulty::Expert,
        };

        Ok(Self {
            board,
            to_move,
            difficulty,
        })
    }

    /// Encode the request the way a client would send it.
    pub fn to_query(&self) -> Result<String> {
        let size = self.size();
        if size > MAX_WIRE_SIZE {
            return Err(Error::query(format!(
                "a {size}x{size} board does not fit the single-digit wire format"
            )));
        }

        let mut tokens = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let code = cell_code(self.board.get(Coord::new(row, col)));
                tokens.push(format!("{row}{col}{code}"));
            }
        }

        Ok(format!(
            "n={size}&currentPlayer={}&board={}&AI={}",
            player_code(self.to_move),
            tokens.join("+"),
            self.difficulty.wire_name()
        ))
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(self.size(), self.to_move).with_difficulty(self.difficulty)
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    value.ok_or_else(|| Error::query(format!("missing parameter '{name}'")))
}

/// Undo `application/x-www-form-urlencoded` escaping.
fn decode_component(raw: &str) -> Result<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let byte = raw
                    .get(i + 1..i + 3)
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                    .ok_or_else(|| Error::query(format!("bad percent escape in '{raw}'")))?;
                out.push(byte);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out).map_err(|_| Error::query(format!("'{raw}' is not valid UTF-8")))
}

fn parse_player_code(code: &str) -> Result<Player> {
    match code.trim() {
        "1" => Ok(Player::X),
        "2" | "-1" => Ok(Player::O),
        other => Err(Error::InvalidPlayerString {
            player: other.to_string(),
            expected: "1 or 2".to_string(),
        }),
    }
}

fn player_code(player: Player) -> u8 {
    match player {
        Player::X => 1,
        Player::O => 2,
    }
}

fn cell_code(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => 0,
        Cell::X => 1,
        Cell::O => 2,
    }
}

fn parse_triple(token: &str) -> Result<(usize, usize, Cell)> {
    let digits: Vec<u32> = token.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 3 || token.chars().count() != 3 {
        return Err(Error::query(format!(
            "board token '{token}' is not <row><col><player>"
        )));
    }

    let cell = match digits[2] {
        0 => Cell::Empty,
        1 => Cell::X,
        2 => Cell::O,
        other => {
            return Err(Error::query(format!(
                "board token '{token}' has player {other}, expected 0, 1 or 2"
            )));
        }
    };

    Ok((digits[0] as usize, digits[1] as usize, cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_3X3: &str = "000+010+020+100+110+120+200+210+220";

    #[test]
    fn test_parse_request() {
        let request = MoveRequest::parse(&format!(
            "?n=3&currentPlayer=1&board={}&AI=AI1",
            "001+012+020+100+110+120+200+210+220"
        ))
        .unwrap();

        assert_eq!(request.size(), 3);
        assert_eq!(request.to_move, Player::X);
        assert_eq!(request.difficulty, Difficulty::Easy);
        assert_eq!(request.board.get(Coord::new(0, 0)), Cell::X);
        assert_eq!(request.board.get(Coord::new(0, 1)), Cell::O);
        assert_eq!(request.board.occupied_count(), 2);
    }

    #[test]
    fn test_percent_encoded_spaces() {
        let query = format!(
            "n=3&currentPlayer=2&board={}&AI=AI3",
            EMPTY_3X3.replace('+', "%20")
        );
        let request = MoveRequest::parse(&query).unwrap();
        assert_eq!(request.to_move, Player::O);
        assert_eq!(request.board, Board::new(3).unwrap());
    }

    #[test]
    fn test_missing_ai_means_expert() {
        let request =
            MoveRequest::parse(&format!("n=3&currentPlayer=1&board={EMPTY_3X3}")).unwrap();
        assert_eq!(request.difficulty, Difficulty::Expert);
        assert!(request.search_config().is_unlimited());
    }

    #[test]
    fn test_rejects_malformed_requests() {
        assert!(matches!(
            MoveRequest::parse(&format!("currentPlayer=1&board={EMPTY_3X3}")),
            Err(Error::InvalidQuery { .. })
        ));
        assert!(matches!(
            MoveRequest::parse(&format!("n=3&currentPlayer=3&board={EMPTY_3X3}")),
            Err(Error::InvalidPlayerString { .. })
        ));
        assert!(MoveRequest::parse("n=3&currentPlayer=1&board=000+010").is_err());
        assert!(MoveRequest::parse("n=3&currentPlayer=1&board=00x").is_err());
        assert!(MoveRequest::parse("n=x&currentPlayer=1&board=000").is_err());
        assert!(MoveRequest::parse("n=3&currentPlayer=1&board=%2").is_err());
        assert!(matches!(
            MoveRequest::parse(&format!("n=3&currentPlayer=1&board={EMPTY_3X3}&AI=AI9")),
            Err(Error::ParseDifficulty { .. })
        ));
    }

    #[test]
    fn test_size_mismatch_is_a_configuration_error() {
        let err = MoveRequest::parse(&format!("n=2&currentPlayer=1&board={EMPTY_3X3}"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_to_query() {
        let board = Board::from_string("X.../..../..O./....").unwrap();
        let request = MoveRequest::new(board, Player::X, Difficulty::Hard);
        let query = request.to_query().unwrap();

        assert!(query.starts_with("n=4&currentPlayer=1&board=001+010+"));
        assert!(query.contains("+222+"));
        assert!(query.ends_with("&AI=AI2"));
        assert_eq!(MoveRequest::parse(&query).unwrap(), request);
    }

    #[test]
    fn test_to_query_rejects_large_boards() {
        let request = MoveRequest::new(Board::new(11).unwrap(), Player::X, Difficulty::Easy);
        assert!(request.to_query().is_err());
    }
}
