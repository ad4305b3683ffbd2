//! The nine Playground games.
//!
//! Each module is self-contained: an initializer, pure transitions over its
//! own `GameState<Board>`, and an engine struct implementing
//! [`RulesEngine`](crate::rules::RulesEngine). Games never call each other.

pub mod battleship;
pub mod connect_four;
pub mod geo_quiz;
pub mod hangman;
pub mod memory;
pub mod number_duel;
pub mod rps;
pub mod tictactoe;
pub mod wordle;
