//! Number-duel: guess the hidden number with higher/lower hints.

mod game;

pub use game::{
    compare, guesses_by, make_guess, new_game, Feedback, GuessRecord, NumberDuel, NumberDuelBoard, NumberDuelConfig,
    NumberDuelState, MAX_RANGE,
};
