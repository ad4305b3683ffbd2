//! Picture-based geography quiz over a fixed number of rounds.

mod config;
mod game;

pub use config::{GeoQuizConfig, Location};
pub use game::{make_guess, new_game, GeoQuiz, GeoQuizBoard, GeoQuizState};
