//! Noughts - tic-tac-toe in the terminal.
//!
//! Thin front-end over [`noughts_engine`]: renders the board, forwards
//! cell numbers, and reports outcomes. All game logic lives in the
//! engine; this binary only does I/O and pacing.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use noughts_engine::{ApplyOutcome, GameStatus, MatchConfig, MatchSession, Mode, MoveError};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(mode = %config.mode(), difficulty = %config.difficulty(), "Starting match");

    let delay = Duration::from_millis(cli.think_delay_ms);
    let mut session = MatchSession::new(config);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Some(opening) = session.start() {
            // Only reachable under a variant setup where the computer
            // holds the opening turn.
            println!("Computer opens at {}", opening.index + 1);
        }

        run_match(&mut session, delay, &mut lines)?;

        if session.status() == GameStatus::InProgress {
            // The player quit mid-game.
            return Ok(());
        }
        if !prompt_yes_no("Play again? (y/n): ", &mut lines)? {
            return Ok(());
        }
    }
}

/// Builds the match configuration from file and flags.
///
/// Flags override file values; anything unset falls back to the
/// engine's defaults ("Player 1" / "Player 2" / "Computer").
fn load_config(cli: &Cli) -> Result<MatchConfig> {
    let base = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading match config");
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str::<MatchConfig>(&content)
                .with_context(|| format!("failed to parse config file {}", path.display()))?
        }
        None => MatchConfig::default(),
    };

    Ok(MatchConfig::new(
        cli.mode.unwrap_or(*base.mode()),
        cli.difficulty.unwrap_or(*base.difficulty()),
        cli.player1.clone().unwrap_or_else(|| base.player1_name().clone()),
        cli.player2.clone().unwrap_or_else(|| base.player2_name().clone()),
    ))
}

/// Plays one match to completion, or returns early if the player quits.
fn run_match(
    session: &mut MatchSession,
    delay: Duration,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<()> {
    loop {
        println!("\n{}\n", session.board().display());
        println!("{}", session.status_line());

        if session.status() != GameStatus::InProgress {
            return Ok(());
        }

        let Some(index) = prompt_cell(lines)? else {
            return Ok(()); // quit
        };

        match session.submit_move(index) {
            Ok(outcome) => render_outcome(session, &outcome, delay),
            Err(MoveError::CellOccupied(_)) => println!("That cell is already taken."),
            Err(err) => println!("{err}"),
        }
    }
}

/// Shows the computer's reply after a short pause, and the winning
/// line when the game just ended in a win.
fn render_outcome(session: &MatchSession, outcome: &ApplyOutcome, delay: Duration) {
    if outcome.moves.len() > 1 {
        // The engine already applied the reply; the pause is pacing
        // only, so the response doesn't feel instantaneous.
        if *session.config().mode() == Mode::VsComputer && !delay.is_zero() {
            std::thread::sleep(delay);
        }
        println!("Computer plays {}", outcome.moves[1].index + 1);
    }
    if let Some(line) = outcome.winning_line {
        println!(
            "Winning line: {}, {}, {}",
            line[0] + 1,
            line[1] + 1,
            line[2] + 1
        );
    }
}

/// Prompts for a cell number (1-9) or `q` to quit.
fn prompt_cell(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<Option<usize>> {
    loop {
        print!("Cell (1-9, q to quit): ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match input.parse::<usize>() {
            Ok(cell) if (1..=9).contains(&cell) => return Ok(Some(cell - 1)),
            _ => println!("Enter a number from 1 to 9."),
        }
    }
}

fn prompt_yes_no(
    prompt: &str,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<bool> {
    loop {
        print!("{prompt}");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(false);
        };
        match line?.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}
