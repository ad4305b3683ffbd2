//! Rules engine trait for game implementations.
//!
//! Each game exposes named pure functions (`make_move`, `fire_shot`, ...)
//! for the UI. The engine structs wrap those functions behind
//! `RulesEngine` so generic drivers and tests can enumerate and apply
//! actions without knowing which game they are driving.

use std::fmt::Debug;

use crate::core::{GameState, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
    /// The player(s) ran out of attempts.
    Lost,
    /// Solo game played to the end without a win/lose verdict (quiz).
    Completed,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec once the game is over
/// - `apply_action`: Must return the input unchanged for illegal actions
/// - `apply_action` takes `&mut self` so engines with an automatic
///   opponent can own their RNG; everything else is deterministic
pub trait RulesEngine {
    /// Game-specific board payload.
    type Board: Clone + PartialEq + Debug;

    /// Discrete player action.
    type Action: Clone + Debug;

    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Enumerate the actions that would change the state.
    fn legal_actions(&self, state: &GameState<Self::Board>) -> Vec<Self::Action>;

    /// Apply an action, returning the next state.
    fn apply_action(
        &mut self,
        state: &GameState<Self::Board>,
        action: &Self::Action,
    ) -> GameState<Self::Board>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState<Self::Board>) -> Option<GameResult> {
        state.result()
    }
}
