//! Rock-Paper-Scissors, a single round.
//!
//! Multiplayer rounds are sequential and hidden: `P1` commits, then `P2`.
//! Single-player rounds resolve against a uniformly random opponent.

mod game;

pub use game::{make_choice, new_game, opponent_choice, outcome, Choice, RockPaperScissors, RpsBoard, RpsState};
