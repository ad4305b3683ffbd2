//! The common game envelope shared by every Playground game.
//!
//! ## GameState
//!
//! `GameState<B>` carries what every game has in common (whose turn it is,
//! the status, the winner, the optional mode) and is parameterised over the
//! game-specific board payload `B`. Each game owns its own transition
//! functions over its concrete `GameState<Board>`; nothing dispatches
//! dynamically on the payload type.
//!
//! ## Transitions
//!
//! Transitions take `&GameState<B>` and return a new value. They are written
//! as a fallible step (`Result<GameState<B>, Rejection>`) wrapped by
//! [`GameState::apply`], which turns a rejection back into the unchanged
//! input so the public functions are total.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::Rejection;
use super::player::Player;
use crate::rules::GameResult;

/// Lifecycle status. `InProgress` is the only non-terminal value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    InProgress,
    Win,
    Draw,
    Lose,
}

impl Status {
    /// True for `Win`, `Draw` and `Lose`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Who drives the `P2` seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// `P2` is absent or played by the automatic opponent.
    #[default]
    Singleplayer,
    /// Two humans share the device.
    Multiplayer,
}

/// Generic game envelope.
///
/// ## Example
///
/// ```
/// use playground_engine::core::{GameState, Player, Status};
///
/// let state = GameState::new([None::<Player>; 9]);
/// assert_eq!(state.current_player, Player::P1);
/// assert_eq!(state.status, Status::InProgress);
/// assert!(!state.is_terminal());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState<B> {
    /// Game-specific payload.
    pub board: B,

    /// Seat expected to act next.
    pub current_player: Player,

    pub status: Status,

    /// Set together with `Status::Win` when a seat won.
    pub winner: Option<Player>,

    pub mode: Option<Mode>,
}

impl<B> GameState<B> {
    /// Create an in-progress state with `P1` to move and no mode.
    #[must_use]
    pub fn new(board: B) -> Self {
        Self {
            board,
            current_player: Player::P1,
            status: Status::InProgress,
            winner: None,
            mode: None,
        }
    }

    /// Set the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// True once the status is `Win`, `Draw` or `Lose`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// True when the mode is explicitly `Multiplayer`.
    #[must_use]
    pub fn is_multiplayer(&self) -> bool {
        self.mode == Some(Mode::Multiplayer)
    }

    /// Fail with `Rejection::GameOver` if the game has ended.
    pub fn ensure_in_progress(&self) -> Result<(), Rejection> {
        if self.is_terminal() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }

    /// Hand the turn to the other seat.
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// End the game with `player` as the winner.
    pub fn finish_win(&mut self, player: Player) {
        self.status = Status::Win;
        self.winner = Some(player);
    }

    /// End a solo game that has no winning seat (e.g. a finished quiz).
    pub fn finish_complete(&mut self) {
        self.status = Status::Win;
        self.winner = None;
    }

    /// End the game as a draw.
    pub fn finish_draw(&mut self) {
        self.status = Status::Draw;
        self.winner = None;
    }

    /// End the game as a loss for the player(s).
    pub fn finish_lose(&mut self) {
        self.status = Status::Lose;
        self.winner = None;
    }

    /// Terminal outcome, or `None` while the game continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match (self.status, self.winner) {
            (Status::InProgress, _) => None,
            (Status::Win, Some(player)) => Some(GameResult::Winner(player)),
            (Status::Win, None) => Some(GameResult::Completed),
            (Status::Draw, _) => Some(GameResult::Draw),
            (Status::Lose, _) => Some(GameResult::Lost),
        }
    }
}

impl<B: Clone> GameState<B> {
    /// Run a fallible transition step, returning `self` unchanged on rejection.
    pub fn apply(
        &self,
        game: &'static str,
        step: impl FnOnce(&Self) -> Result<Self, Rejection>,
    ) -> Self {
        self.apply_or_else(game, step, |_, _| {})
    }

    /// Like [`apply`](Self::apply), but lets the game annotate the returned
    /// copy with the rejection (for a message field).
    ///
    /// `GameOver` is never annotated: terminal states are returned as-is.
    pub fn apply_or_else(
        &self,
        game: &'static str,
        step: impl FnOnce(&Self) -> Result<Self, Rejection>,
        annotate: impl FnOnce(&mut Self, &Rejection),
    ) -> Self {
        match step(self) {
            Ok(next) => next,
            Err(reason) => {
                trace!(game, %reason, "action rejected");
                let mut unchanged = self.clone();
                if reason != Rejection::GameOver {
                    annotate(&mut unchanged, &reason);
                }
                unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(());
        assert_eq!(state.current_player, Player::P1);
        assert_eq!(state.status, Status::InProgress);
        assert_eq!(state.winner, None);
        assert_eq!(state.mode, None);
        assert!(state.result().is_none());
    }

    #[test]
    fn test_finish_helpers() {
        let mut state = GameState::new(()).with_mode(Mode::Multiplayer);
        assert!(state.is_multiplayer());

        state.finish_win(Player::P2);
        assert_eq!(state.result(), Some(GameResult::Winner(Player::P2)));
        assert!(state.ensure_in_progress().is_err());

        state.finish_draw();
        assert_eq!(state.result(), Some(GameResult::Draw));
        assert_eq!(state.winner, None);

        state.finish_lose();
        assert_eq!(state.result(), Some(GameResult::Lost));

        state.finish_complete();
        assert_eq!(state.result(), Some(GameResult::Completed));
    }

    #[test]
    fn test_apply_keeps_state_on_rejection() {
        let state = GameState::new(0u8);
        let next = state.apply("test", |_| Err(Rejection::RowFull));
        assert_eq!(next, state);

        let next = state.apply("test", |s| {
            let mut s = s.clone();
            s.board += 1;
            Ok(s)
        });
        assert_eq!(next.board, 1);
    }

    #[test]
    fn test_apply_or_else_skips_annotation_when_over() {
        let mut state = GameState::new(String::new());
        state.finish_draw();

        let next = state.apply_or_else(
            "test",
            |s| s.ensure_in_progress().map(|_| s.clone()),
            |s, reason| s.board = reason.to_string(),
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_state_serde() {
        let state = GameState::new(vec![1, 2, 3]).with_mode(Mode::Singleplayer);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState<Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
