//! Memory-match transitions.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{ConfigError, GameRng, GameState, Mode, Rejection};
use crate::rules::RulesEngine;

/// Memory-match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Card faces; each appears on exactly two cards.
    pub symbols: Vec<String>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        let symbols = ["🍎", "🍌", "🍇", "🍓", "🍒", "🍍", "🥝", "🍉"];
        Self {
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MemoryConfig {
    /// Create a new config with custom card faces.
    pub fn with_symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::Empty { what: "card symbols" });
        }
        Ok(())
    }
}

/// A single card on the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: usize,
    pub value: String,
    pub is_flipped: bool,
    pub is_matched: bool,
}

/// Memory-match payload for the game envelope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryBoard {
    pub cards: Vector<Card>,
    /// Face-up, unresolved cards (at most two).
    pub flipped_indices: SmallVec<[usize; 2]>,
    /// Resolved pairs, matched or not.
    pub moves_count: u32,
}

/// Memory-match game state.
pub type MemoryState = GameState<MemoryBoard>;

/// A memory-match action, for `RulesEngine` drivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryAction {
    Flip(usize),
    CheckMatch,
}

/// Deal two cards per symbol, shuffled, all face down.
pub fn new_game(config: &MemoryConfig, rng: &mut GameRng) -> Result<MemoryState, ConfigError> {
    config.validate()?;

    let mut values: Vec<&String> = config.symbols.iter().chain(config.symbols.iter()).collect();
    rng.shuffle(&mut values);

    let cards = values
        .into_iter()
        .enumerate()
        .map(|(id, value)| Card {
            id,
            value: value.clone(),
            is_flipped: false,
            is_matched: false,
        })
        .collect();

    let board = MemoryBoard {
        cards,
        flipped_indices: SmallVec::new(),
        moves_count: 0,
    };

    Ok(GameState::new(board).with_mode(Mode::Singleplayer))
}

/// Turn the card at `index` face up.
///
/// Rejected while two cards are already up, or if the card is already face
/// up or matched.
#[must_use]
pub fn flip_card(state: &MemoryState, index: usize) -> MemoryState {
    state.apply("memory", |s| try_flip_card(s, index))
}

fn try_flip_card(state: &MemoryState, index: usize) -> Result<MemoryState, Rejection> {
    state.ensure_in_progress()?;

    if state.board.flipped_indices.len() >= 2 {
        return Err(Rejection::PairAlreadyFlipped);
    }

    match state.board.cards.get(index) {
        Some(card) if !card.is_flipped && !card.is_matched => {}
        _ => return Err(Rejection::CardUnavailable { index }),
    }

    let mut next = state.clone();
    if let Some(card) = next.board.cards.get_mut(index) {
        card.is_flipped = true;
    }
    next.board.flipped_indices.push(index);

    Ok(next)
}

/// Resolve the two face-up cards.
///
/// Equal values stay up as matched; otherwise both turn back down. Either
/// way the pair counts as one move. Does nothing unless exactly two cards
/// are up. The delay before calling this is up to the UI.
#[must_use]
pub fn check_match(state: &MemoryState) -> MemoryState {
    state.apply("memory", try_check_match)
}

fn try_check_match(state: &MemoryState) -> Result<MemoryState, Rejection> {
    state.ensure_in_progress()?;

    let [first, second] = state.board.flipped_indices[..] else {
        return Err(Rejection::PairIncomplete);
    };

    let mut next = state.clone();
    let matched = next.board.cards[first].value == next.board.cards[second].value;

    for index in [first, second] {
        if let Some(card) = next.board.cards.get_mut(index) {
            if matched {
                card.is_matched = true;
            } else {
                card.is_flipped = false;
            }
        }
    }

    next.board.flipped_indices.clear();
    next.board.moves_count += 1;

    if next.board.cards.iter().all(|card| card.is_matched) {
        debug!(moves = next.board.moves_count, "memory completed");
        let player = next.current_player;
        next.finish_win(player);
    }

    Ok(next)
}

/// Number of matched pairs so far.
#[must_use]
pub fn matched_pairs(state: &MemoryState) -> usize {
    state.board.cards.iter().filter(|card| card.is_matched).count() / 2
}

/// `RulesEngine` adapter for memory-match.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryMatch;

impl RulesEngine for MemoryMatch {
    type Board = MemoryBoard;
    type Action = MemoryAction;

    fn name(&self) -> &'static str {
        "memory"
    }

    fn legal_actions(&self, state: &MemoryState) -> Vec<MemoryAction> {
        if state.is_terminal() {
            return Vec::new();
        }

        if state.board.flipped_indices.len() == 2 {
            return vec![MemoryAction::CheckMatch];
        }

        state
            .board
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.is_flipped && !card.is_matched)
            .map(|(i, _)| MemoryAction::Flip(i))
            .collect()
    }

    fn apply_action(&mut self, state: &MemoryState, action: &MemoryAction) -> MemoryState {
        match *action {
            MemoryAction::Flip(index) => flip_card(state, index),
            MemoryAction::CheckMatch => check_match(state),
        }
    }
}
