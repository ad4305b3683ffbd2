//! Wordle-style word puzzle with Turkish-aware letter handling.
//!
//! Letters are typed into a buffer and submitted as a whole row. Every
//! accepted row is scored with [`evaluate_guess`]; refused actions leave the
//! state as it was apart from `WordleBoard::error_message`.

mod dictionary;
mod game;
mod scoring;

pub use dictionary::Dictionary;
pub use game::{
    delete_letter, keyboard_state, new_game, submit_guess, submit_word, type_letter, Wordle, WordleAction,
    WordleBoard, WordleConfig, WordleState,
};
pub use scoring::{evaluate_guess, LetterFeedback, LetterResult};
