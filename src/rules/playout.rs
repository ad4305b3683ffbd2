//! Uniform-random playout of any `RulesEngine`.
//!
//! Used by property tests and benchmarks to reach arbitrary positions. This
//! is not an opponent: it picks among legal actions with equal weight for
//! both seats.

use crate::core::{GameRng, GameState};

use super::engine::RulesEngine;

/// Outcome of a random playout.
#[derive(Clone, Debug)]
pub struct Playout<B> {
    /// Every state visited, starting with the initial one.
    pub states: Vec<GameState<B>>,
    /// Number of actions applied.
    pub steps: usize,
}

impl<B> Playout<B> {
    /// The last state reached.
    #[must_use]
    pub fn last(&self) -> &GameState<B> {
        // `states` always holds at least the initial state.
        &self.states[self.states.len() - 1]
    }
}

/// Play random legal actions until the game ends, no actions remain, or
/// `max_steps` actions have been applied (0 = unlimited).
pub fn random_playout<E: RulesEngine>(
    engine: &mut E,
    initial: &GameState<E::Board>,
    rng: &mut GameRng,
    max_steps: usize,
) -> Playout<E::Board> {
    let mut states = vec![initial.clone()];
    let mut current = initial.clone();
    let mut steps = 0;

    loop {
        if engine.is_terminal(&current).is_some() {
            break;
        }

        if max_steps > 0 && steps >= max_steps {
            break;
        }

        let actions = engine.legal_actions(&current);
        let Some(action) = rng.choose(&actions) else {
            break;
        };

        current = engine.apply_action(&current, action);
        states.push(current.clone());
        steps += 1;
    }

    Playout { states, steps }
}
