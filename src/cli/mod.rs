//! Command-line front end for the move engine
//!
//! Each subcommand lives in [`commands`] and exposes an `Args` struct plus an
//! `execute` function returning `anyhow::Result`.

pub mod commands;
pub mod config;
pub mod output;
