//! Rock-paper-scissors transitions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, GameRngState, GameState, Mode, Player, PlayerMap, Rejection};
use crate::rules::RulesEngine;

/// A hand shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All three shapes.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Cyclic dominance: rock > scissors > paper > rock.
    #[must_use]
    pub const fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }
}

/// Choices recorded so far, one slot per seat.
pub type RpsBoard = PlayerMap<Option<Choice>>;

/// Rock-paper-scissors game state.
pub type RpsState = GameState<RpsBoard>;

/// Create a round with nothing chosen yet.
#[must_use]
pub fn new_game(mode: Mode) -> RpsState {
    GameState::new(PlayerMap::with_default()).with_mode(mode)
}

/// Record the current player's choice.
///
/// In multiplayer, `P1`'s choice is stored and the turn passes to `P2`;
/// `P2`'s choice resolves the round. In single-player, `rng` draws the
/// opponent's choice and the round resolves immediately. `rng` is not
/// touched in multiplayer.
#[must_use]
pub fn make_choice(state: &RpsState, choice: Choice, rng: &mut GameRng) -> RpsState {
    state.apply("rps", |s| try_make_choice(s, choice, rng))
}

fn try_make_choice(state: &RpsState, choice: Choice, rng: &mut GameRng) -> Result<RpsState, Rejection> {
    state.ensure_in_progress()?;

    let mut next = state.clone();
    next.board[state.current_player] = Some(choice);

    if state.is_multiplayer() {
        if state.current_player == Player::P1 {
            next.pass_turn();
            return Ok(next);
        }
    } else {
        next.board[Player::P2] = Some(opponent_choice(rng));
    }

    resolve(&mut next);
    Ok(next)
}

/// Uniformly random opponent choice.
pub fn opponent_choice(rng: &mut GameRng) -> Choice {
    Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
}

fn resolve(state: &mut RpsState) {
    let (Some(p1), Some(p2)) = (state.board[Player::P1], state.board[Player::P2]) else {
        return;
    };

    if p1.beats(p2) {
        state.finish_win(Player::P1);
    } else if p2.beats(p1) {
        state.finish_win(Player::P2);
    } else {
        state.finish_draw();
    }

    debug!(?p1, ?p2, status = ?state.status, "rps resolved");
}

/// Both choices once the round is resolved.
#[must_use]
pub fn outcome(state: &RpsState) -> Option<(Choice, Choice)> {
    if !state.is_terminal() {
        return None;
    }
    state.board[Player::P1].zip(state.board[Player::P2])
}

/// `RulesEngine` adapter that owns the opponent's RNG.
#[derive(Clone, Debug)]
pub struct RockPaperScissors {
    rng: GameRng,
}

impl RockPaperScissors {
    /// Create an engine whose single-player opponent draws from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Snapshot of the opponent's RNG, for replaying a round.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl RulesEngine for RockPaperScissors {
    type Board = RpsBoard;
    type Action = Choice;

    fn name(&self) -> &'static str {
        "rps"
    }

    fn legal_actions(&self, state: &RpsState) -> Vec<Choice> {
        if state.is_terminal() {
            Vec::new()
        } else {
            Choice::ALL.to_vec()
        }
    }

    fn apply_action(&mut self, state: &RpsState, action: &Choice) -> RpsState {
        make_choice(state, *action, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    #[test]
    fn test_dominance_is_cyclic() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Scissors.beats(Choice::Paper));
        assert!(Choice::Paper.beats(Choice::Rock));
        for c in Choice::ALL {
            assert!(!c.beats(c));
        }
    }

    #[test]
    fn test_multiplayer_hides_until_second_choice() {
        let mut rng = GameRng::new(1);
        let state = new_game(Mode::Multiplayer);

        let state = make_choice(&state, Choice::Rock, &mut rng);
        assert_eq!(state.status, Status::InProgress);
        assert_eq!(state.current_player, Player::P2);
        assert_eq!(outcome(&state), None);

        let state = make_choice(&state, Choice::Paper, &mut rng);
        assert_eq!(state.status, Status::Win);
        assert_eq!(state.winner, Some(Player::P2));
        assert_eq!(outcome(&state), Some((Choice::Rock, Choice::Paper)));
    }

    #[test]
    fn test_multiplayer_draw() {
        let mut rng = GameRng::new(1);
        let state = new_game(Mode::Multiplayer);
        let state = make_choice(&state, Choice::Scissors, &mut rng);
        let state = make_choice(&state, Choice::Scissors, &mut rng);
        assert_eq!(state.status, Status::Draw);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_singleplayer_resolves_immediately() {
        let mut rng = GameRng::new(42);
        let state = make_choice(&new_game(Mode::Singleplayer), Choice::Rock, &mut rng);

        assert!(state.is_terminal());
        assert_eq!(state.current_player, Player::P1);
        let (p1, p2) = outcome(&state).unwrap();
        assert_eq!(p1, Choice::Rock);
        match state.status {
            Status::Win if state.winner == Some(Player::P1) => assert!(p1.beats(p2)),
            Status::Win => assert!(p2.beats(p1)),
            Status::Draw => assert_eq!(p1, p2),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_singleplayer_is_replayable() {
        let a = make_choice(&new_game(Mode::Singleplayer), Choice::Paper, &mut GameRng::new(9));
        let b = make_choice(&new_game(Mode::Singleplayer), Choice::Paper, &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_is_whole_game() {
        let mut rng = GameRng::new(3);
        let state = make_choice(&new_game(Mode::Singleplayer), Choice::Rock, &mut rng);
        assert_eq!(make_choice(&state, Choice::Paper, &mut rng), state);
    }

    #[test]
    fn test_opponent_choice_covers_all_shapes() {
        let mut rng = GameRng::new(5);
        let seen: std::collections::HashSet<_> = (0..100).map(|_| opponent_choice(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }
}
