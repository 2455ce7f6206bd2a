//! Subcommands of the `tictactoe-ai` binary

pub mod play;
pub mod query;
pub mod solve;
