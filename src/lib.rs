//! # playground-engine
//!
//! Pure game-state logic for a collection of small turn-based games:
//! Tic-Tac-Toe, Connect-Four, Rock-Paper-Scissors, Battleship, Memory-Match,
//! Number-Duel, Geo-Quiz, Hangman and a Wordle-style word puzzle.
//!
//! ## Design Principles
//!
//! 1. **Immutable transitions**: every action takes `&GameState<B>` and
//!    returns a new state. Illegal actions return the input unchanged
//!    (optionally annotated with a message), so transitions never fail.
//!
//! 2. **Terminal states are absorbing**: once a game is won, drawn or lost,
//!    no transition changes it.
//!
//! 3. **Injected randomness**: shuffles, targets and the single-player
//!    opponent draw from a seedable [`GameRng`], so any game can be replayed.
//!
//! ## Modules
//!
//! - `core`: players, the `GameState` envelope, RNG, rejections, locale
//! - `rules`: the `RulesEngine` trait and a random playout driver
//! - `games`: one module per game
//!
//! ## Example
//!
//! ```
//! use playground_engine::games::tictactoe::{make_move, new_game};
//! use playground_engine::{Player, Status};
//!
//! let state = [0, 4, 1, 5, 2]
//!     .into_iter()
//!     .fold(new_game(None), |s, cell| make_move(&s, cell));
//! assert_eq!(state.status, Status::Win);
//! assert_eq!(state.winner, Some(Player::P1));
//! ```

pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, GameRngState, GameState, Mode, Player, PlayerMap, Rejection, Status,
};

pub use crate::rules::{random_playout, GameResult, Playout, RulesEngine};
