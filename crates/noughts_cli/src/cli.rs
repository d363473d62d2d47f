//! Command-line interface for the noughts front-end.

use clap::Parser;
use noughts_engine::{Difficulty, Mode};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe, optionally against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Game mode: two-player or vs-computer
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Computer difficulty: easy, medium, or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Display name for player 1 (X)
    #[arg(long)]
    pub player1: Option<String>,

    /// Display name for player 2 (O)
    #[arg(long)]
    pub player2: Option<String>,

    /// Pause before showing the computer's reply, in milliseconds
    #[arg(long, default_value = "500")]
    pub think_delay_ms: u64,
}
