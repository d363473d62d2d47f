//! Match session: turn ownership, move validation, and the computer
//! opponent's reply.

use crate::board::{Board, Mark};
use crate::config::{MatchConfig, Mode};
use crate::error::MoveError;
use crate::rules::{self, GameStatus, Line};
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    /// Cell index (0-8).
    pub index: usize,
    /// The mark that was placed.
    pub mark: Mark,
}

/// Result of a successful move submission, for the host UI to render.
///
/// This is the engine's whole event surface: the ordered moves that
/// were applied (a computer reply rides along with the human move that
/// triggered it), the resulting status, and the completed line when the
/// game ended in a win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    /// Moves applied by this submission, in order.
    pub moves: Vec<AppliedMove>,
    /// Game status after all applied moves.
    pub status: GameStatus,
    /// The winning line, when `status` is `Won`. For highlighting.
    pub winning_line: Option<Line>,
}

/// One match of tic-tac-toe.
///
/// Owns the board and the turn state; X always moves first. In
/// vs-computer mode the configured strategy plays O and replies
/// synchronously inside [`submit_move`](Self::submit_move). The
/// session performs no I/O and never blocks; all outcomes are
/// returned values.
#[derive(Debug)]
pub struct MatchSession {
    config: MatchConfig,
    board: Board,
    to_move: Mark,
    /// The computer's mark and strategy, when playing vs computer.
    ai: Option<(Mark, Box<dyn Strategy>)>,
}

impl MatchSession {
    /// Creates a session for the given configuration.
    ///
    /// The board starts empty with X to move. Call
    /// [`start`](Self::start) to begin (and again to play again).
    #[instrument(skip(config), fields(mode = %config.mode(), difficulty = %config.difficulty()))]
    pub fn new(config: MatchConfig) -> Self {
        let ai = match config.mode() {
            Mode::VsComputer => {
                let strategy = config.difficulty().strategy();
                info!(strategy = strategy.name(), "Computer opponent configured");
                Some((Mark::O, strategy))
            }
            Mode::TwoPlayer => None,
        };
        Self {
            config,
            board: Board::new(),
            to_move: Mark::X,
            ai,
        }
    }

    /// Creates a vs-computer session with an explicit strategy.
    ///
    /// The configured difficulty is ignored; used by hosts and tests
    /// that need a seeded or custom opponent.
    pub fn with_strategy(config: MatchConfig, strategy: Box<dyn Strategy>) -> Self {
        Self {
            config,
            board: Board::new(),
            to_move: Mark::X,
            ai: Some((Mark::O, strategy)),
        }
    }

    /// Starts the match, or resets it to play again with the same
    /// configuration.
    ///
    /// The board is rebuilt from scratch and X moves first. If a
    /// variant setup ever hands the opening turn to the computer, its
    /// move is selected and applied here; under the default rules the
    /// human holds X and this returns `None`.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Option<AppliedMove> {
        self.board = Board::new();
        self.to_move = Mark::X;
        info!("Match started");
        self.computer_reply()
    }

    /// Submits a move for whichever side is on turn (pass and play).
    ///
    /// On success the mark is applied, the turn flips, and — if the
    /// game is still in progress with the computer on turn — the
    /// computer's reply is applied in the same call.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameAlreadyOver`], [`MoveError::InvalidIndex`], or
    /// [`MoveError::CellOccupied`]; the board is unchanged on failure.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<ApplyOutcome, MoveError> {
        if rules::status(&self.board) != GameStatus::InProgress {
            warn!(index, "Move submitted to a finished game");
            return Err(MoveError::GameAlreadyOver);
        }

        let mark = self.to_move;
        self.board.place(index, mark)?;
        self.to_move = mark.opponent();
        debug!(index, %mark, "Move applied");

        let mut moves = vec![AppliedMove { index, mark }];
        if let Some(reply) = self.computer_reply() {
            moves.push(reply);
        }

        let status = rules::status(&self.board);
        let winning_line = match status {
            GameStatus::Won(winner) => rules::winning_line(&self.board, winner),
            _ => None,
        };
        if status != GameStatus::InProgress {
            info!(?status, "Game concluded");
        }

        Ok(ApplyOutcome {
            moves,
            status,
            winning_line,
        })
    }

    /// Submits a move for a specific side, enforcing turn order.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotYourTurn`] when `mark` is not on turn, plus
    /// everything [`submit_move`](Self::submit_move) can return.
    #[instrument(skip(self))]
    pub fn submit_move_for(&mut self, mark: Mark, index: usize) -> Result<ApplyOutcome, MoveError> {
        if mark != self.to_move {
            warn!(%mark, index, "Out-of-turn move rejected");
            return Err(MoveError::NotYourTurn(mark));
        }
        self.submit_move(index)
    }

    /// Applies the computer's move if the game is in progress and the
    /// computer is on turn. Selection is synchronous; any pacing delay
    /// belongs to the host UI.
    fn computer_reply(&mut self) -> Option<AppliedMove> {
        if rules::status(&self.board) != GameStatus::InProgress {
            return None;
        }
        let (ai_mark, strategy) = self.ai.as_mut()?;
        if *ai_mark != self.to_move {
            return None;
        }
        let ai_mark = *ai_mark;
        let index = strategy.select_move(&self.board, ai_mark, ai_mark.opponent())?;
        // The strategy picked from available_moves; place cannot fail.
        self.board.place_unchecked(index, ai_mark);
        self.to_move = ai_mark.opponent();
        debug!(index, %ai_mark, "Computer move applied");
        Some(AppliedMove {
            index,
            mark: ai_mark,
        })
    }

    /// The current game status. Always safe to call.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// The board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark on turn.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// A display line for the current state, using configured names:
    /// "Ada's turn (X)", "Ada wins!", or "It's a draw!".
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::InProgress => {
                let mark = self.to_move;
                format!("{}'s turn ({})", self.config.name_of(mark), mark)
            }
            GameStatus::Won(winner) => format!("{} wins!", self.config.name_of(winner)),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}
