//! Solve command - Score every move of a single position

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::{Side, infer_to_move},
        output::{
            format_number, print_kv, print_score_table, print_section, print_subsection,
            render_board,
        },
    },
    error::Error,
    search::{Difficulty, HeuristicKind, RootCoordinator, SearchConfig, SearchReport},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Score every legal move of a position")]
pub struct SolveArgs {
    /// Board rows separated by '/', e.g. "X../.O./..."
    #[arg(long, short = 'b')]
    pub board: String,

    /// Side to move (inferred from the piece counts when omitted)
    #[arg(long, short = 't', value_enum)]
    pub to_move: Option<Side>,

    /// Difficulty preset that sets the search depth
    #[arg(long, short = 'd', value_enum, default_value_t = Difficulty::Expert)]
    pub difficulty: Difficulty,

    /// Explicit depth limit, overriding the difficulty (0 = unlimited)
    #[arg(long)]
    pub depth: Option<u32>,

    /// Leaf scoring strategy
    #[arg(long, value_enum, default_value_t = HeuristicKind::LinePotential)]
    pub heuristic: HeuristicKind,

    /// Disable alpha-beta cut-offs
    #[arg(long)]
    pub no_pruning: bool,

    /// Write the search report as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl SolveArgs {
    fn search_config(&self, board: &Board, to_move: Player) -> SearchConfig {
        let config = SearchConfig::new(board.size(), to_move)
            .with_difficulty(self.difficulty)
            .with_heuristic(self.heuristic)
            .with_pruning(!self.no_pruning);
        match self.depth {
            Some(depth) => config.with_max_depth(depth),
            None => config,
        }
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let report = solve(&args)?;

    if let Some(path) = &args.export {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).map_err(|source| Error::Io {
            operation: format!("write report to {}", path.display()),
            source,
        })?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

/// Run the search and print the result
pub fn solve(args: &SolveArgs) -> Result<SearchReport> {
    let board = Board::from_string(&args.board).context("failed to parse --board")?;
    let to_move = args
        .to_move
        .map(Player::from)
        .unwrap_or_else(|| infer_to_move(&board));
    let config = args.search_config(&board, to_move);

    print_section(&format!("Position ({0}x{0}, {1} to move)", board.size(), to_move));
    println!("{}", render_board(&board));

    print_subsection("Search");
    let depth = if config.is_unlimited() {
        "unlimited".to_string()
    } else {
        config.max_depth.to_string()
    };
    print_kv("Depth", &depth);
    print_kv("Heuristic", &format!("{:?}", config.heuristic));
    print_kv("Pruning", if config.pruning { "on" } else { "off" });

    let report = RootCoordinator::new(config).analyse(&board)?;

    print_subsection("Scores");
    print_score_table(&report);

    print_subsection("Result");
    print_kv("Chosen move", &report.chosen.to_string());
    print_kv("Score", &report.best_score.to_string());
    print_kv("Nodes", &format_number(report.stats.nodes));
    print_kv("Leaves", &format_number(report.stats.leaves));
    print_kv("Cut-offs", &format_number(report.stats.cutoffs));

    Ok(report)
}
