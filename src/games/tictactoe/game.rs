//! Tic-tac-toe transitions.

use tracing::debug;

use crate::core::{GameState, Mode, Player, Rejection};
use crate::rules::RulesEngine;

use super::rules::{check_draw, check_winner};

/// Row-major 3x3 grid.
pub type TicTacToeBoard = [Option<Player>; 9];

/// Tic-tac-toe game state.
pub type TicTacToeState = GameState<TicTacToeBoard>;

/// Create an empty board with `P1` to move.
#[must_use]
pub fn new_game(mode: Option<Mode>) -> TicTacToeState {
    let mut state = GameState::new([None; 9]);
    state.mode = mode;
    state
}

/// Place the current player's mark at `index` (0-8).
///
/// Occupied or out-of-range cells, and moves after the game ended, return
/// the state unchanged.
///
/// ```
/// use playground_engine::core::{Player, Status};
/// use playground_engine::games::tictactoe::{make_move, new_game};
///
/// let state = [0, 4, 1, 5, 2]
///     .into_iter()
///     .fold(new_game(None), |s, i| make_move(&s, i));
///
/// assert_eq!(state.status, Status::Win);
/// assert_eq!(state.winner, Some(Player::P1));
/// ```
#[must_use]
pub fn make_move(state: &TicTacToeState, index: usize) -> TicTacToeState {
    state.apply("tictactoe", |s| try_make_move(s, index))
}

fn try_make_move(state: &TicTacToeState, index: usize) -> Result<TicTacToeState, Rejection> {
    state.ensure_in_progress()?;

    match state.board.get(index) {
        None => {
            return Err(Rejection::OutOfBounds {
                position: index.to_string(),
            })
        }
        Some(Some(_)) => return Err(Rejection::CellOccupied { index }),
        Some(None) => {}
    }

    let mut next = state.clone();
    next.board[index] = Some(state.current_player);

    if let Some(winner) = check_winner(&next.board) {
        debug!(%winner, "tictactoe won");
        next.finish_win(winner);
    } else if check_draw(&next.board) {
        debug!("tictactoe drawn");
        next.finish_draw();
    } else {
        next.pass_turn();
    }

    Ok(next)
}

/// Indices of the empty cells, or nothing once the game is over.
#[must_use]
pub fn legal_moves(state: &TicTacToeState) -> Vec<usize> {
    if state.is_terminal() {
        return Vec::new();
    }

    state
        .board
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(i, _)| i)
        .collect()
}

/// `RulesEngine` adapter for tic-tac-toe.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl RulesEngine for TicTacToe {
    type Board = TicTacToeBoard;
    type Action = usize;

    fn name(&self) -> &'static str {
        "tictactoe"
    }

    fn legal_actions(&self, state: &TicTacToeState) -> Vec<usize> {
        legal_moves(state)
    }

    fn apply_action(&mut self, state: &TicTacToeState, action: &usize) -> TicTacToeState {
        make_move(state, *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    fn play(moves: &[usize]) -> TicTacToeState {
        moves
            .iter()
            .fold(new_game(Some(Mode::Multiplayer)), |s, &i| make_move(&s, i))
    }

    #[test]
    fn test_turns_alternate() {
        let state = play(&[4]);
        assert_eq!(state.board[4], Some(Player::P1));
        assert_eq!(state.current_player, Player::P2);

        let state = make_move(&state, 0);
        assert_eq!(state.board[0], Some(Player::P2));
        assert_eq!(state.current_player, Player::P1);
    }

    #[test]
    fn test_top_row_win_keeps_current_player() {
        let state = play(&[0, 4, 1, 5, 2]);
        assert_eq!(state.status, Status::Win);
        assert_eq!(state.winner, Some(Player::P1));
        assert_eq!(state.current_player, Player::P1);
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let state = play(&[4]);
        assert_eq!(make_move(&state, 4), state);
        assert_eq!(make_move(&state, 9), state);
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status, Status::Draw);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_terminal_state_absorbs_moves() {
        let state = play(&[0, 4, 1, 5, 2]);
        assert_eq!(make_move(&state, 8), state);
        assert!(legal_moves(&state).is_empty());
    }

    #[test]
    fn test_legal_moves() {
        let state = play(&[0, 8]);
        assert_eq!(legal_moves(&state), vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
