//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions produce the next state
//! - Win/draw/loss conditions (derived from the envelope by default)
//!
//! `playout` drives any engine with uniformly random legal actions.

pub mod engine;
pub mod playout;

pub use engine::{GameResult, RulesEngine};
pub use playout::{random_playout, Playout};
