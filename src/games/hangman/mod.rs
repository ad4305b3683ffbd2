//! Hangman-style word guess: letters, not positions.

mod game;

pub use game::{
    make_guess, masked_word, new_game, wrong_letters, Hangman, HangmanBoard, HangmanConfig, HangmanState, ALPHABET,
};
