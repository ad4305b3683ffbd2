//! Number-duel transitions.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ConfigError, GameRng, GameState, Mode, Player, Rejection};
use crate::rules::RulesEngine;

/// Most values a duel range may span.
pub const MAX_RANGE: u32 = 10_000;

/// Number-duel configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberDuelConfig {
    /// Smallest possible target (inclusive, default: 1).
    pub min: u32,
    /// Largest possible target (inclusive, default: 100).
    pub max: u32,
    pub mode: Mode,
}

impl Default for NumberDuelConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            mode: Mode::Singleplayer,
        }
    }
}

impl NumberDuelConfig {
    /// Create a new config with a custom inclusive range.
    pub fn with_range(mut self, min: u32, max: u32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Create a new config with a custom mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.max - self.min >= MAX_RANGE {
            return Err(ConfigError::RangeTooWide {
                min: self.min,
                max: self.max,
                limit: MAX_RANGE,
            });
        }
        Ok(())
    }
}

/// Hint given after a guess, relative to the guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// The target is above the guess.
    Higher,
    /// The target is below the guess.
    Lower,
    Correct,
}

/// One accepted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRecord {
    pub player: Player,
    pub guess: u32,
    pub feedback: Feedback,
}

/// Number-duel payload for the game envelope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberDuelBoard {
    pub target_number: u32,
    pub min: u32,
    pub max: u32,
    pub history: Vector<GuessRecord>,
    /// Feedback for the most recent guess.
    pub feedback: Option<Feedback>,
}

/// Number-duel game state.
pub type NumberDuelState = GameState<NumberDuelBoard>;

/// Pick the hidden target uniformly from the configured range.
pub fn new_game(config: &NumberDuelConfig, rng: &mut GameRng) -> Result<NumberDuelState, ConfigError> {
    config.validate()?;

    let board = NumberDuelBoard {
        target_number: rng.gen_range(config.min..=config.max),
        min: config.min,
        max: config.max,
        history: Vector::new(),
        feedback: None,
    };

    Ok(GameState::new(board).with_mode(config.mode))
}

/// Compare `guess` with the target.
#[must_use]
pub fn compare(target: u32, guess: u32) -> Feedback {
    match guess.cmp(&target) {
        std::cmp::Ordering::Less => Feedback::Higher,
        std::cmp::Ordering::Greater => Feedback::Lower,
        std::cmp::Ordering::Equal => Feedback::Correct,
    }
}

/// Record the current player's guess.
///
/// A correct guess wins for the guesser. In multiplayer a wrong guess passes
/// the turn; in single-player the same player keeps guessing. Guesses
/// outside the range are rejected.
#[must_use]
pub fn make_guess(state: &NumberDuelState, guess: u32) -> NumberDuelState {
    state.apply("number_duel", |s| try_make_guess(s, guess))
}

fn try_make_guess(state: &NumberDuelState, guess: u32) -> Result<NumberDuelState, Rejection> {
    state.ensure_in_progress()?;

    let board = &state.board;
    if guess < board.min || guess > board.max {
        return Err(Rejection::GuessOutOfRange {
            guess,
            min: board.min,
            max: board.max,
        });
    }

    let feedback = compare(board.target_number, guess);
    let player = state.current_player;

    let mut next = state.clone();
    next.board.history.push_back(GuessRecord { player, guess, feedback });
    next.board.feedback = Some(feedback);

    if feedback == Feedback::Correct {
        debug!(%player, guesses = next.board.history.len(), "number duel won");
        next.finish_win(player);
    } else if state.is_multiplayer() {
        next.pass_turn();
    }

    Ok(next)
}

/// Guesses made by `player`, oldest first.
#[must_use]
pub fn guesses_by(state: &NumberDuelState, player: Player) -> Vec<u32> {
    state
        .board
        .history
        .iter()
        .filter(|record| record.player == player)
        .map(|record| record.guess)
        .collect()
}

/// `RulesEngine` adapter for number-duel.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberDuel;

impl RulesEngine for NumberDuel {
    type Board = NumberDuelBoard;
    type Action = u32;

    fn name(&self) -> &'static str {
        "number_duel"
    }

    fn legal_actions(&self, state: &NumberDuelState) -> Vec<u32> {
        if state.is_terminal() {
            return Vec::new();
        }
        (state.board.min..=state.board.max).collect()
    }

    fn apply_action(&mut self, state: &NumberDuelState, action: &u32) -> NumberDuelState {
        make_guess(state, *action)
    }
}
