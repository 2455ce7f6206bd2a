//! Shared helpers for the integration tests.

#![allow(dead_code)]

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tictactoe_ai::tictactoe::{Board, Coord, Player};

/// A board reached by alternating moves from an empty board, X first,
/// together with the side to move. At least one cell is left empty.
///
/// Play does not stop at a win, so some boards hold more than one
/// completed line.
pub fn random_position(size: usize, rng: &mut StdRng) -> (Board, Player) {
    let mut coords: Vec<Coord> = (0..size)
        .flat_map(|row| (0..size).map(move |col| Coord::new(row, col)))
        .collect();
    coords.shuffle(rng);

    let marks = rng.random_range(0..size * size);
    let mut board = Board::new(size).expect("valid size");
    let mut player = Player::X;
    for coord in coords.into_iter().take(marks) {
        board = board.apply_move(coord, player).expect("empty cell");
        player = player.opponent();
    }
    (board, player)
}

/// A random position that is still in play
pub fn random_open_position(size: usize, rng: &mut StdRng) -> (Board, Player) {
    loop {
        let (board, player) = random_position(size, rng);
        if board.winner().is_none() {
            return (board, player);
        }
    }
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn board(s: &str) -> Board {
    Board::from_string(s).expect("valid board")
}
