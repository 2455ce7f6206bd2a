//! Output formatting and progress bars for CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    search::SearchReport,
    tictactoe::{Board, Coord},
};

/// Progress bar for a batch of games
pub fn create_games_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

/// Board with row and column indices
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("   ");
    for col in 0..size {
        out.push_str(&format!(" {col}"));
    }
    for row in 0..size {
        out.push_str(&format!("\n  {row}"));
        for col in 0..size {
            out.push(' ');
            out.push(board.get(Coord::new(row, col)).to_char());
        }
    }
    out
}

/// Per-move score table, marking the chosen move
pub fn print_score_table(report: &SearchReport) {
    println!("  {:>8}  {:>10}", "move", "score");
    for entry in &report.scores {
        let marker = if entry.coord == report.chosen { " <" } else { "" };
        println!("  {:>8}  {:>10}{marker}", entry.coord.to_string(), entry.score);
    }
}
