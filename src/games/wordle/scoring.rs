//! Duplicate-aware letter scoring.
//!
//! Two passes over the guess:
//!
//! 1. Exact matches are `Correct` and consume their letter from the pool of
//!    available target letters.
//! 2. Every other position is `Present` if the pool still holds that letter
//!    (consuming one instance), else `Absent`.
//!
//! A letter therefore never earns more `Correct`/`Present` marks than it has
//! occurrences in the target.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Per-letter feedback, ordered from least to most informative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

/// One scored tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterResult {
    pub letter: char,
    pub feedback: LetterFeedback,
}

/// Score `guess` against `target`. Both must already be normalised.
///
/// ```
/// use playground_engine::games::wordle::{evaluate_guess, LetterFeedback::*};
///
/// let row: Vec<_> = evaluate_guess("ALMA", "MAMA").iter().map(|r| r.feedback).collect();
/// assert_eq!(row, vec![Absent, Present, Correct, Correct]);
/// ```
#[must_use]
pub fn evaluate_guess(target: &str, guess: &str) -> Vec<LetterResult> {
    let target: Vec<char> = target.chars().collect();
    let guess: Vec<char> = guess.chars().collect();

    let mut feedback = vec![LetterFeedback::Absent; guess.len()];
    let mut pool: FxHashMap<char, usize> = FxHashMap::default();

    // Pass 1: exact matches.
    for (i, &t) in target.iter().enumerate() {
        if guess.get(i) == Some(&t) {
            feedback[i] = LetterFeedback::Correct;
        } else {
            *pool.entry(t).or_insert(0) += 1;
        }
    }

    // Pass 2: misplaced letters.
    for (i, g) in guess.iter().enumerate() {
        if feedback[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(available) = pool.get_mut(g).filter(|n| **n > 0) {
            *available -= 1;
            feedback[i] = LetterFeedback::Present;
        }
    }

    guess
        .into_iter()
        .zip(feedback)
        .map(|(letter, feedback)| LetterResult { letter, feedback })
        .collect()
}
