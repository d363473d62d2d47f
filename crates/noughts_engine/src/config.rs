//! Match configuration: mode, difficulty, and player names.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Game mode.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans sharing the board (pass and play).
    #[default]
    TwoPlayer,
    /// One human (X) against the computer (O).
    VsComputer,
}

/// Computer opponent difficulty tier.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
    /// Win if possible, block if necessary, otherwise random.
    Medium,
    /// Exhaustive minimax search with alpha-beta pruning.
    Hard,
}

/// Configuration for one match.
///
/// Immutable for the duration of a match; "play again" reuses it,
/// a new setup replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Game mode.
    #[serde(default)]
    mode: Mode,

    /// Computer difficulty (ignored in two-player mode).
    #[serde(default)]
    difficulty: Difficulty,

    /// Display name for player 1 (X).
    #[serde(default = "default_player1")]
    player1_name: String,

    /// Display name for player 2 (O).
    #[serde(default = "default_player2")]
    player2_name: String,
}

fn default_player1() -> String {
    "Player 1".to_string()
}

fn default_player2() -> String {
    "Player 2".to_string()
}

impl MatchConfig {
    /// Creates a normalized match configuration.
    #[instrument(skip(player1_name, player2_name))]
    pub fn new(
        mode: Mode,
        difficulty: Difficulty,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            difficulty,
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
        }
        .normalized()
    }

    /// Applies the display-name rules: names are trimmed, blank names
    /// fall back to defaults, and the computer always plays as
    /// "Computer".
    pub fn normalized(mut self) -> Self {
        self.player1_name = normalize_name(&self.player1_name, default_player1);
        self.player2_name = match self.mode {
            Mode::VsComputer => "Computer".to_string(),
            Mode::TwoPlayer => normalize_name(&self.player2_name, default_player2),
        };
        self
    }

    /// Returns the display name for the given mark.
    pub fn name_of(&self, mark: crate::board::Mark) -> &str {
        match mark {
            crate::board::Mark::X => &self.player1_name,
            crate::board::Mark::O => &self.player2_name,
        }
    }
}

fn normalize_name(name: &str, fallback: fn() -> String) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback()
    } else {
        trimmed.to_string()
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Mode::default(), Difficulty::default(), "", "")
    }
}
