//! Geo-quiz transitions.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{GeoQuizConfig, Location};
use crate::core::{ConfigError, GameRng, GameState, Mode, Rejection};
use crate::rules::RulesEngine;

/// Geo-quiz payload for the game envelope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoQuizBoard {
    /// Locations drawn for this quiz, one per round.
    pub deck: Vector<Location>,
    pub current_location: Location,
    pub score: u32,
    /// 1-based; exceeds `total_rounds` once the quiz is complete.
    pub round: u32,
    pub total_rounds: u32,
    pub last_answer_correct: Option<bool>,
}

/// Geo-quiz game state.
pub type GeoQuizState = GameState<GeoQuizBoard>;

/// Draw the rounds up front, shuffling both the deck and each option list.
pub fn new_game(config: &GeoQuizConfig, rng: &mut GameRng) -> Result<GeoQuizState, ConfigError> {
    config.validate()?;

    let mut locations = config.locations.clone();
    rng.shuffle(&mut locations);
    locations.truncate(config.total_rounds as usize);
    for location in &mut locations {
        rng.shuffle(&mut location.options);
    }

    let deck: Vector<Location> = locations.into_iter().collect();
    let current_location = deck
        .front()
        .cloned()
        .ok_or(ConfigError::Empty { what: "locations" })?;

    let board = GeoQuizBoard {
        total_rounds: deck.len() as u32,
        deck,
        current_location,
        score: 0,
        round: 1,
        last_answer_correct: None,
    };

    Ok(GameState::new(board).with_mode(Mode::Singleplayer))
}

/// Answer the current round with one of its options.
///
/// ```
/// use playground_engine::core::{GameRng, Status};
/// use playground_engine::games::geo_quiz::{make_guess, new_game, GeoQuizConfig};
///
/// let config = GeoQuizConfig::default().with_total_rounds(1);
/// let state = new_game(&config, &mut GameRng::new(4)).unwrap();
/// let answer = state.board.current_location.name.clone();
/// let state = make_guess(&state, &answer);
/// assert_eq!(state.board.score, 1);
/// assert_eq!(state.status, Status::Win);
/// assert_eq!(state.winner, None);
/// ```
#[must_use]
pub fn make_guess(state: &GeoQuizState, choice: &str) -> GeoQuizState {
    state.apply("geo_quiz", |s| try_make_guess(s, choice))
}

fn try_make_guess(state: &GeoQuizState, choice: &str) -> Result<GeoQuizState, Rejection> {
    state.ensure_in_progress()?;

    let location = &state.board.current_location;
    if !location.offers(choice) {
        return Err(Rejection::UnknownOption(choice.to_string()));
    }
    let correct = choice == location.name;

    let mut next = state.clone();
    if correct {
        next.board.score += 1;
    }
    next.board.last_answer_correct = Some(correct);
    next.board.round += 1;

    if next.board.round > next.board.total_rounds {
        debug!(score = next.board.score, rounds = next.board.total_rounds, "geo quiz complete");
        next.finish_complete();
    } else if let Some(upcoming) = next.board.deck.get(next.board.round as usize - 1) {
        next.board.current_location = upcoming.clone();
    }

    Ok(next)
}

/// `RulesEngine` adapter for geo-quiz.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoQuiz;

impl RulesEngine for GeoQuiz {
    type Board = GeoQuizBoard;
    type Action = String;

    fn name(&self) -> &'static str {
        "geo_quiz"
    }

    fn legal_actions(&self, state: &GeoQuizState) -> Vec<String> {
        if state.is_terminal() {
            return Vec::new();
        }
        state.board.current_location.options.to_vec()
    }

    fn apply_action(&mut self, state: &GeoQuizState, action: &String) -> GeoQuizState {
        make_guess(state, action)
    }
}
