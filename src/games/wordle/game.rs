//! Wordle transitions: buffer editing and guess submission.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dictionary::Dictionary;
use super::scoring::{evaluate_guess, LetterFeedback, LetterResult};
use crate::core::locale::{letter_count, normalize_word, upper_letter};
use crate::core::{ConfigError, GameRng, GameState, Mode, Rejection};
use crate::rules::RulesEngine;

/// Wordle configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordleConfig {
    /// Letters per word (default: 5).
    pub word_length: usize,
    /// Guesses allowed (default: 6).
    pub max_attempts: u32,
}

impl Default for WordleConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_attempts: 6,
        }
    }
}

impl WordleConfig {
    /// Create a new config with a custom word length.
    pub fn with_word_length(mut self, length: usize) -> Self {
        self.word_length = length;
        self
    }

    /// Create a new config with a custom attempt budget.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::TooSmall {
                what: "word length",
                min: 1,
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::TooSmall {
                what: "max attempts",
                min: 1,
            });
        }
        Ok(())
    }
}

/// Wordle payload for the game envelope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordleBoard {
    pub target_word: String,
    /// Scored rows, oldest first.
    pub guesses: Vector<Vec<LetterResult>>,
    /// Letters typed for the row being edited.
    pub current_guess: String,
    pub word_length: usize,
    pub max_attempts: u32,
    pub current_attempt_index: u32,
    /// Why the last action was refused, cleared by the next accepted one.
    pub error_message: Option<String>,
}

/// Wordle game state.
pub type WordleState = GameState<WordleBoard>;

/// A Wordle action, for `RulesEngine` drivers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordleAction {
    Type(char),
    Delete,
    Submit,
    /// Type and submit a whole word.
    Guess(String),
}

/// Pick a target of the configured length from `dictionary`.
pub fn new_game(
    config: &WordleConfig,
    dictionary: &Dictionary,
    rng: &mut GameRng,
) -> Result<WordleState, ConfigError> {
    config.validate()?;

    let candidates = dictionary.words_of_length(config.word_length);
    let target = rng.choose(&candidates).ok_or(ConfigError::NoWordsOfLength {
        length: config.word_length,
    })?;

    let board = WordleBoard {
        target_word: (*target).to_string(),
        guesses: Vector::new(),
        current_guess: String::new(),
        word_length: config.word_length,
        max_attempts: config.max_attempts,
        current_attempt_index: 0,
        error_message: None,
    };

    Ok(GameState::new(board).with_mode(Mode::Singleplayer))
}

fn apply_wordle(
    state: &WordleState,
    step: impl FnOnce(&WordleState) -> Result<WordleState, Rejection>,
) -> WordleState {
    state.apply_or_else("wordle", step, |s, reason| {
        s.board.error_message = Some(reason.to_string());
    })
}

/// Append a letter to the buffer.
#[must_use]
pub fn type_letter(state: &WordleState, letter: char) -> WordleState {
    apply_wordle(state, |s| try_type_letter(s, letter))
}

fn try_type_letter(state: &WordleState, letter: char) -> Result<WordleState, Rejection> {
    state.ensure_in_progress()?;

    if !letter.is_alphabetic() {
        return Err(Rejection::NotALetter(letter));
    }
    if letter_count(&state.board.current_guess) >= state.board.word_length {
        return Err(Rejection::RowFull);
    }

    let mut next = state.clone();
    next.board.current_guess.push(upper_letter(letter));
    next.board.error_message = None;
    Ok(next)
}

/// Remove the last letter from the buffer.
#[must_use]
pub fn delete_letter(state: &WordleState) -> WordleState {
    apply_wordle(state, try_delete_letter)
}

fn try_delete_letter(state: &WordleState) -> Result<WordleState, Rejection> {
    state.ensure_in_progress()?;

    let mut next = state.clone();
    if next.board.current_guess.pop().is_none() {
        return Err(Rejection::RowEmpty);
    }
    next.board.error_message = None;
    Ok(next)
}

/// Score the buffer as the next attempt.
///
/// Too short, too long or unknown words set `error_message` and cost
/// nothing.
#[must_use]
pub fn submit_guess(state: &WordleState, dictionary: &Dictionary) -> WordleState {
    apply_wordle(state, |s| try_submit_guess(s, dictionary))
}

/// Replace the buffer with `word` and submit it.
///
/// ```
/// use playground_engine::core::{GameRng, Status};
/// use playground_engine::games::wordle::{new_game, submit_word, Dictionary, WordleConfig};
///
/// let dictionary = Dictionary::new(["elmas"]);
/// let state = new_game(&WordleConfig::default(), &dictionary, &mut GameRng::new(0)).unwrap();
/// let state = submit_word(&state, "elmas", &dictionary);
/// assert_eq!(state.status, Status::Win);
/// ```
#[must_use]
pub fn submit_word(state: &WordleState, word: &str, dictionary: &Dictionary) -> WordleState {
    apply_wordle(state, |s| {
        s.ensure_in_progress()?;
        let mut staged = s.clone();
        staged.board.current_guess = normalize_word(word);
        try_submit_guess(&staged, dictionary)
    })
}

fn try_submit_guess(state: &WordleState, dictionary: &Dictionary) -> Result<WordleState, Rejection> {
    state.ensure_in_progress()?;

    let board = &state.board;
    let guess = &board.current_guess;

    let actual = letter_count(guess);
    if actual != board.word_length {
        return Err(Rejection::WrongLength {
            expected: board.word_length,
            actual,
        });
    }
    if *guess != board.target_word && !dictionary.contains(guess) {
        return Err(Rejection::NotInWordList(guess.clone()));
    }

    let row = evaluate_guess(&board.target_word, guess);
    let solved = *guess == board.target_word;

    let mut next = state.clone();
    next.board.guesses.push_back(row);
    next.board.current_attempt_index += 1;
    next.board.current_guess.clear();
    next.board.error_message = None;

    if solved {
        debug!(attempts = next.board.current_attempt_index, "wordle solved");
        let player = next.current_player;
        next.finish_win(player);
    } else if next.board.current_attempt_index >= next.board.max_attempts {
        debug!(word = %next.board.target_word, "wordle lost");
        next.finish_lose();
    }

    Ok(next)
}

/// Best feedback seen so far for every guessed letter.
#[must_use]
pub fn keyboard_state(state: &WordleState) -> BTreeMap<char, LetterFeedback> {
    let mut keys = BTreeMap::new();
    for result in state.board.guesses.iter().flatten() {
        keys.entry(result.letter)
            .and_modify(|best: &mut LetterFeedback| *best = (*best).max(result.feedback))
            .or_insert(result.feedback);
    }
    keys
}

/// `RulesEngine` adapter for Wordle, owning its dictionary.
#[derive(Clone, Debug)]
pub struct Wordle {
    dictionary: Dictionary,
}

impl Wordle {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

impl Default for Wordle {
    fn default() -> Self {
        Self::new(Dictionary::turkish())
    }
}

impl RulesEngine for Wordle {
    type Board = WordleBoard;
    type Action = WordleAction;

    fn name(&self) -> &'static str {
        "wordle"
    }

    /// Whole-word guesses only; editing actions are left to interactive
    /// callers.
    fn legal_actions(&self, state: &WordleState) -> Vec<WordleAction> {
        if state.is_terminal() {
            return Vec::new();
        }
        self.dictionary
            .words_of_length(state.board.word_length)
            .into_iter()
            .map(|w| WordleAction::Guess(w.to_string()))
            .collect()
    }

    fn apply_action(&mut self, state: &WordleState, action: &WordleAction) -> WordleState {
        match action {
            WordleAction::Type(letter) => type_letter(state, *letter),
            WordleAction::Delete => delete_letter(state),
            WordleAction::Submit => submit_guess(state, &self.dictionary),
            WordleAction::Guess(word) => submit_word(state, word, &self.dictionary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, Status};

    fn game_with(target: &str, attempts: u32) -> (WordleState, Dictionary) {
        let dictionary = Dictionary::turkish();
        let mut state = new_game(
            &WordleConfig::default().with_max_attempts(attempts),
            &dictionary,
            &mut GameRng::new(0),
        )
        .unwrap();
        state.board.target_word = target.to_string();
        (state, dictionary)
    }

    fn type_word(state: &WordleState, word: &str) -> WordleState {
        word.chars().fold(state.clone(), |s, c| type_letter(&s, c))
    }

    #[test]
    fn test_target_comes_from_dictionary() {
        let dictionary = Dictionary::turkish();
        let state = new_game(&WordleConfig::default(), &dictionary, &mut GameRng::new(9)).unwrap();
        assert!(dictionary.contains(&state.board.target_word));
        assert_eq!(state.board.current_attempt_index, 0);
        assert_eq!(state.board.error_message, None);
    }

    #[test]
    fn test_no_words_of_length() {
        let config = WordleConfig::default().with_word_length(7);
        assert_eq!(
            new_game(&config, &Dictionary::turkish(), &mut GameRng::new(0)).unwrap_err(),
            ConfigError::NoWordsOfLength { length: 7 }
        );
    }

    #[test]
    fn test_typing_upper_cases_turkish() {
        let (state, _) = game_with("KİTAP", 6);
        let state = type_word(&state, "kitap");
        assert_eq!(state.board.current_guess, "KİTAP");
    }

    #[test]
    fn test_full_row_rejects_letter() {
        let (state, _) = game_with("KİTAP", 6);
        let full = type_word(&state, "kalem");
        let state = type_letter(&full, 'x');
        assert_eq!(state.board.current_guess, "KALEM");
        assert_eq!(state.board.error_message.as_deref(), Some("The row is full"));
    }

    #[test]
    fn test_delete_letter() {
        let (state, _) = game_with("KİTAP", 6);
        let state = delete_letter(&type_word(&state, "ka"));
        assert_eq!(state.board.current_guess, "K");

        let empty = delete_letter(&delete_letter(&state));
        assert_eq!(empty.board.current_guess, "");
        assert!(empty.board.error_message.is_some());
    }

    #[test]
    fn test_short_guess_sets_error_without_attempt() {
        let (state, dictionary) = game_with("KİTAP", 6);
        let state = submit_guess(&type_word(&state, "kal"), &dictionary);
        assert_eq!(state.board.current_attempt_index, 0);
        assert_eq!(state.board.error_message.as_deref(), Some("Word must be 5 letters"));
        assert_eq!(state.board.current_guess, "KAL");
    }

    #[test]
    fn test_unknown_word_sets_error() {
        let (state, dictionary) = game_with("KİTAP", 6);
        let state = submit_guess(&type_word(&state, "qqqqq"), &dictionary);
        assert_eq!(state.board.current_attempt_index, 0);
        assert!(state.board.guesses.is_empty());
        assert_eq!(state.board.error_message.as_deref(), Some("Not in word list"));

        // Typing again clears the message.
        let state = delete_letter(&state);
        assert_eq!(state.board.error_message, None);
    }

    #[test]
    fn test_accepted_guess_appends_row() {
        let (state, dictionary) = game_with("KİTAP", 6);
        let state = submit_guess(&type_word(&state, "kalem"), &dictionary);
        assert_eq!(state.board.current_attempt_index, 1);
        assert_eq!(state.board.guesses.len(), 1);
        assert_eq!(state.board.current_guess, "");
        assert_eq!(state.board.guesses[0][0].feedback, LetterFeedback::Correct);
        assert_eq!(state.status, Status::InProgress);
    }

    #[test]
    fn test_correct_guess_wins() {
        let (state, dictionary) = game_with("KİTAP", 6);
        let state = submit_word(&state, "kitap", &dictionary);
        assert_eq!(state.status, Status::Win);
        assert_eq!(state.winner, Some(Player::P1));
        assert_eq!(type_letter(&state, 'a'), state);
    }

    #[test]
    fn test_running_out_of_attempts_loses() {
        let (state, dictionary) = game_with("KİTAP", 2);
        let state = submit_word(&state, "kalem", &dictionary);
        let state = submit_word(&state, "elmas", &dictionary);
        assert_eq!(state.status, Status::Lose);
        assert_eq!(state.winner, None);
        assert_eq!(submit_word(&state, "kitap", &dictionary), state);
    }

    #[test]
    fn test_submit_word_keeps_buffer_on_rejection() {
        let (state, dictionary) = game_with("KİTAP", 6);
        let typed = type_word(&state, "ka");
        let rejected = submit_word(&typed, "zzz", &dictionary);
        assert_eq!(rejected.board.current_guess, "KA");
        assert_eq!(rejected.board.error_message.as_deref(), Some("Word must be 5 letters"));
        assert_eq!(submit_word(&rejected, "zzz", &dictionary), rejected);
    }

    #[test]
    fn test_keyboard_state_keeps_best_feedback() {
        let (state, dictionary) = game_with("KALEM", 6);
        // ELMAS: E, L, M, A present; S absent.
        let state = submit_word(&state, "elmas", &dictionary);
        // KEMAN: K correct, E, M, A present; N absent.
        let state = submit_word(&state, "keman", &dictionary);
        let keys = keyboard_state(&state);
        assert_eq!(keys[&'K'], LetterFeedback::Correct);
        assert_eq!(keys[&'E'], LetterFeedback::Present);
        assert_eq!(keys[&'S'], LetterFeedback::Absent);
        assert!(!keys.contains_key(&'Z'));
    }
}
