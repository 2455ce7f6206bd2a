//! tictactoe-ai - Minimax move engine for N×N tic-tac-toe
//!
//! Subcommands:
//! - `solve`: score every move of a position
//! - `query`: answer a raw query-string request with JSON
//! - `play`: run games between engine levels or a random player

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tictactoe_ai::cli::commands::{play, query, solve};

#[derive(Parser)]
#[command(name = "tictactoe-ai")]
#[command(version, about = "Minimax move engine for N×N tic-tac-toe", long_about = None)]
struct Cli {
    /// Log search progress (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every legal move of a position
    Solve(solve::SolveArgs),

    /// Answer a query-string move request
    Query(query::QueryArgs),

    /// Play games between engine levels or a random player
    Play(play::PlayArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve(args) => solve::execute(args),
        Commands::Query(args) => query::execute(args),
        Commands::Play(args) => play::execute(args, cli.verbose),
    }
}
