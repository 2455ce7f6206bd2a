//! Play command - Pit engine difficulties and a random player against each other

use std::fmt;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    cli::{
        config::CommonConfig,
        output::{create_games_progress, print_kv, print_section, print_subsection, render_board},
    },
    protocol::{self, MAX_WIRE_SIZE, MoveRequest},
    search::Difficulty,
    tictactoe::{Board, Coord, Game, GameOutcome, Player},
};

/// Who makes the moves for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Contender {
    Easy,
    Hard,
    Expert,
    /// Uniformly random legal moves
    Random,
}

impl Contender {
    fn difficulty(self) -> Option<Difficulty> {
        match self {
            Contender::Easy => Some(Difficulty::Easy),
            Contender::Hard => Some(Difficulty::Hard),
            Contender::Expert => Some(Difficulty::Expert),
            Contender::Random => None,
        }
    }

    /// Pick a move for `to_move`. Engine moves go through the request layer.
    pub fn choose(self, board: &Board, to_move: Player, rng: &mut impl Rng) -> Result<Coord> {
        match self.difficulty() {
            Some(difficulty) => {
                let query = MoveRequest::new(board.clone(), to_move, difficulty).to_query()?;
                Ok(protocol::respond(&query, false)?.coord()?)
            }
            None => {
                let moves = board.empty_cells();
                if moves.is_empty() {
                    bail!("no legal move left for {to_move}");
                }
                Ok(moves[rng.random_range(0..moves.len())])
            }
        }
    }
}

impl fmt::Display for Contender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Contender::Easy => "easy",
            Contender::Hard => "hard",
            Contender::Expert => "expert",
            Contender::Random => "random",
        };
        f.write_str(name)
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play games between engine levels or a random player")]
pub struct PlayArgs {
    /// Board size
    #[arg(long, short = 'n', default_value_t = 3)]
    pub size: usize,

    /// Player for X (moves first)
    #[arg(long, value_enum, default_value_t = Contender::Expert)]
    pub x: Contender,

    /// Player for O
    #[arg(long, value_enum, default_value_t = Contender::Random)]
    pub o: Contender,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl PlayArgs {
    pub fn common(&self, verbose: bool) -> CommonConfig {
        CommonConfig {
            seed: self.seed,
            progress: !self.no_progress,
            verbose,
        }
    }
}

/// Results of a batch of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Play one game to the end, X moving first
pub fn play_game(size: usize, x: Contender, o: Contender, rng: &mut impl Rng) -> Result<Game> {
    let mut game = Game::new(size, Player::X)?;

    while game.outcome.is_none() {
        let board = game.current_state()?;
        let to_move = game.to_move();
        let contender = match to_move {
            Player::X => x,
            Player::O => o,
        };
        let coord = contender.choose(&board, to_move, rng)?;
        debug!(player = %to_move, %contender, row = coord.row, col = coord.col, "move played");
        game.play(coord)?;
    }

    Ok(game)
}

/// Play `games` games with a seeded generator and count the outcomes
pub fn play_games(args: &PlayArgs, common: &CommonConfig) -> Result<(Tally, Vec<Game>)> {
    if args.size == 0 || args.size > MAX_WIRE_SIZE {
        bail!("--size must be between 1 and {MAX_WIRE_SIZE}, got {}", args.size);
    }
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let seed = common.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    debug!(seed, games = args.games, "starting games");

    let progress = if common.progress && args.games > 1 {
        Some(create_games_progress(args.games as u64)?)
    } else {
        None
    };

    let mut tally = Tally::default();
    let mut games = Vec::with_capacity(args.games);
    for _ in 0..args.games {
        let game = play_game(args.size, args.x, args.o, &mut rng)?;
        if let Some(outcome) = game.outcome {
            tally.record(outcome);
        }
        if let Some(pb) = &progress {
            pb.set_message(format!(
                "X {} / O {} / draw {}",
                tally.x_wins, tally.o_wins, tally.draws
            ));
            pb.inc(1);
        }
        games.push(game);
    }

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    Ok((tally, games))
}

pub fn execute(args: PlayArgs, verbose: bool) -> Result<()> {
    let common = args.common(verbose);
    print_section(&format!("{} (X) vs {} (O) on {2}x{2}", args.x, args.o, args.size));

    let (tally, games) = play_games(&args, &common)?;

    if args.games == 1 || common.verbose {
        for (index, game) in games.iter().enumerate() {
            print_subsection(&format!("Game {}", index + 1));
            print_game(game)?;
        }
    }

    print_subsection("Results");
    print_kv("Games", &tally.total().to_string());
    print_kv(&format!("X wins ({})", args.x), &tally.x_wins.to_string());
    print_kv(&format!("O wins ({})", args.o), &tally.o_wins.to_string());
    print_kv("Draws", &tally.draws.to_string());

    Ok(())
}

fn print_game(game: &Game) -> Result<()> {
    let states = game.state_sequence()?;
    for (state, m) in states.iter().skip(1).zip(&game.moves) {
        println!("{} plays {}", m.player, m.coord);
        println!("{}\n", render_board(state));
    }
    match game.outcome {
        Some(GameOutcome::Win(player)) => println!("{player} wins"),
        Some(GameOutcome::Draw) => println!("Draw"),
        None => println!("Unfinished"),
    }
    Ok(())
}
