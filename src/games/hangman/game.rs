//! Hangman transitions.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::locale::{normalize_word, upper_letter};
use crate::core::{ConfigError, GameRng, GameState, Mode, Rejection};
use crate::rules::RulesEngine;

/// Letters offered on the on-screen keyboard.
pub const ALPHABET: &str = "ABCÇDEFGĞHIİJKLMNOÖPRSŞTUÜVYZ";

const WORDS: &[&str] = &[
    "BİLGİSAYAR", "TELEFON", "KELEBEK", "PENCERE", "OKYANUS",
    "KARPUZ", "ÖĞRETMEN", "YILDIZ", "ÇİKOLATA", "GÖKKUŞAĞI",
    "KÜTÜPHANE", "ZÜRAFA", "PAPAĞAN", "BİSİKLET", "DENİZALTI",
];

/// Hangman configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Candidate target words (normalised when the game starts).
    pub words: Vec<String>,
    /// Wrong guesses allowed (default: 6).
    pub max_attempts: u32,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            words: WORDS.iter().map(|w| w.to_string()).collect(),
            max_attempts: 6,
        }
    }
}

impl HangmanConfig {
    /// Create a new config with a custom word list.
    pub fn with_words<S: Into<String>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Create a new config with a custom attempt budget.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::TooSmall {
                what: "max attempts",
                min: 1,
            });
        }
        if !self.words.iter().any(|w| is_playable(w)) {
            return Err(ConfigError::Empty { what: "words" });
        }
        Ok(())
    }
}

fn is_playable(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
}

/// Hangman payload for the game envelope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HangmanBoard {
    pub target_word: String,
    pub guessed_letters: OrdSet<char>,
    pub remaining_attempts: u32,
    pub max_attempts: u32,
}

/// Hangman game state.
pub type HangmanState = GameState<HangmanBoard>;

/// Pick a target word at random from the configured list.
pub fn new_game(config: &HangmanConfig, rng: &mut GameRng) -> Result<HangmanState, ConfigError> {
    config.validate()?;

    let playable: Vec<&String> = config.words.iter().filter(|w| is_playable(w)).collect();
    let word = rng
        .choose(&playable)
        .ok_or(ConfigError::Empty { what: "words" })?;

    let board = HangmanBoard {
        target_word: normalize_word(word),
        guessed_letters: OrdSet::new(),
        remaining_attempts: config.max_attempts,
        max_attempts: config.max_attempts,
    };

    Ok(GameState::new(board).with_mode(Mode::Singleplayer))
}

/// Guess a letter. Repeated letters are no-ops.
#[must_use]
pub fn make_guess(state: &HangmanState, letter: char) -> HangmanState {
    state.apply("hangman", |s| try_make_guess(s, letter))
}

fn try_make_guess(state: &HangmanState, letter: char) -> Result<HangmanState, Rejection> {
    state.ensure_in_progress()?;

    if !letter.is_alphabetic() {
        return Err(Rejection::NotALetter(letter));
    }

    let letter = upper_letter(letter);
    if state.board.guessed_letters.contains(&letter) {
        return Err(Rejection::AlreadyGuessed(letter));
    }

    let mut next = state.clone();
    next.board.guessed_letters.insert(letter);

    if !state.board.target_word.contains(letter) {
        next.board.remaining_attempts = next.board.remaining_attempts.saturating_sub(1);
        if next.board.remaining_attempts == 0 {
            debug!(word = %next.board.target_word, "hangman lost");
            next.finish_lose();
        }
    } else if is_solved(&next.board) {
        debug!(word = %next.board.target_word, "hangman solved");
        let player = next.current_player;
        next.finish_win(player);
    }

    Ok(next)
}

fn is_solved(board: &HangmanBoard) -> bool {
    board
        .target_word
        .chars()
        .filter(|c| c.is_alphabetic())
        .all(|c| board.guessed_letters.contains(&c))
}

/// The word with unguessed letters replaced by `_`.
///
/// ```
/// use playground_engine::core::GameRng;
/// use playground_engine::games::hangman::{make_guess, masked_word, new_game, HangmanConfig};
///
/// let config = HangmanConfig::default().with_words(["kalem"]);
/// let state = new_game(&config, &mut GameRng::new(1)).unwrap();
/// let state = make_guess(&state, 'a');
/// assert_eq!(masked_word(&state), "_A___");
/// ```
#[must_use]
pub fn masked_word(state: &HangmanState) -> String {
    state
        .board
        .target_word
        .chars()
        .map(|c| {
            if !c.is_alphabetic() || state.board.guessed_letters.contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Guessed letters that are not in the word, alphabetically.
#[must_use]
pub fn wrong_letters(state: &HangmanState) -> Vec<char> {
    state
        .board
        .guessed_letters
        .iter()
        .filter(|c| !state.board.target_word.contains(**c))
        .copied()
        .collect()
}

/// `RulesEngine` adapter for hangman.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hangman;

impl RulesEngine for Hangman {
    type Board = HangmanBoard;
    type Action = char;

    fn name(&self) -> &'static str {
        "hangman"
    }

    fn legal_actions(&self, state: &HangmanState) -> Vec<char> {
        if state.is_terminal() {
            return Vec::new();
        }
        ALPHABET
            .chars()
            .filter(|c| !state.board.guessed_letters.contains(c))
            .collect()
    }

    fn apply_action(&mut self, state: &HangmanState, action: &char) -> HangmanState {
        make_guess(state, *action)
    }
}
