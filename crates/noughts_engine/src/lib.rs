//! Noughts engine - pure tic-tac-toe game logic.
//!
//! The engine owns the board, outcome evaluation, computer-opponent
//! strategies, and turn control. It performs no I/O and installs no
//! subscriber; a host UI submits cell indices and renders the returned
//! outcomes.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid as plain data, decoupled from any widget
//! - **Rules**: win lines, draw detection, derived game status
//! - **Strategy**: random, heuristic, and minimax opponents behind one
//!   trait
//! - **Session**: turn ownership, validation, and the synchronous
//!   computer reply
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Difficulty, GameStatus, MatchConfig, MatchSession, Mode};
//!
//! let config = MatchConfig::new(Mode::VsComputer, Difficulty::Hard, "Ada", "");
//! let mut session = MatchSession::new(config);
//! session.start();
//!
//! // X plays the center; the computer's O reply rides in the outcome.
//! let outcome = session.submit_move(4)?;
//! assert_eq!(outcome.moves.len(), 2);
//! assert_eq!(outcome.status, GameStatus::InProgress);
//! # Ok::<(), noughts_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod error;
mod rules;
mod session;
mod strategy;

// Crate-level exports - Board types
pub use board::{Board, Cell, Mark, NUM_CELLS};

// Crate-level exports - Configuration
pub use config::{Difficulty, MatchConfig, Mode};

// Crate-level exports - Errors
pub use error::MoveError;

// Crate-level exports - Rules
pub use rules::{GameStatus, LINES, Line, has_line, status, winning_line};

// Crate-level exports - Session
pub use session::{AppliedMove, ApplyOutcome, MatchSession};

// Crate-level exports - Strategies
pub use strategy::{HeuristicStrategy, MinimaxStrategy, RandomStrategy, Strategy};
