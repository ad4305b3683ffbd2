//! Connect-Four transitions.

use tracing::debug;

use crate::core::{GameState, Mode, Player, Rejection};
use crate::rules::RulesEngine;

use super::rules::{check_draw, check_winner};

/// Board height.
pub const ROWS: usize = 6;

/// Board width.
pub const COLS: usize = 7;

/// `board[row][col]`, row 0 at the top.
pub type ConnectFourBoard = [[Option<Player>; COLS]; ROWS];

/// Connect-Four game state.
pub type ConnectFourState = GameState<ConnectFourBoard>;

/// Create an empty board with `P1` to move.
#[must_use]
pub fn new_game(mode: Option<Mode>) -> ConnectFourState {
    let mut state = GameState::new([[None; COLS]; ROWS]);
    state.mode = mode;
    state
}

/// Lowest empty row in `column`, or `None` when the column is full.
#[must_use]
pub fn landing_row(board: &ConnectFourBoard, column: usize) -> Option<usize> {
    (0..ROWS).rev().find(|&row| board[row][column].is_none())
}

/// Drop the current player's piece into `column` (0-6).
///
/// A full or out-of-range column is a no-op and does not pass the turn.
#[must_use]
pub fn drop_piece(state: &ConnectFourState, column: usize) -> ConnectFourState {
    state.apply("connect_four", |s| try_drop_piece(s, column))
}

fn try_drop_piece(state: &ConnectFourState, column: usize) -> Result<ConnectFourState, Rejection> {
    state.ensure_in_progress()?;

    if column >= COLS {
        return Err(Rejection::OutOfBounds {
            position: format!("column {column}"),
        });
    }

    let row = landing_row(&state.board, column).ok_or(Rejection::ColumnFull { column })?;

    let mut next = state.clone();
    next.board[row][column] = Some(state.current_player);

    if let Some(winner) = check_winner(&next.board) {
        debug!(%winner, column, "connect four won");
        next.finish_win(winner);
    } else if check_draw(&next.board) {
        debug!("connect four drawn");
        next.finish_draw();
    } else {
        next.pass_turn();
    }

    Ok(next)
}

/// Columns that still accept a piece, or nothing once the game is over.
#[must_use]
pub fn legal_columns(state: &ConnectFourState) -> Vec<usize> {
    if state.is_terminal() {
        return Vec::new();
    }

    (0..COLS).filter(|&col| state.board[0][col].is_none()).collect()
}

/// `RulesEngine` adapter for Connect-Four.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFour;

impl RulesEngine for ConnectFour {
    type Board = ConnectFourBoard;
    type Action = usize;

    fn name(&self) -> &'static str {
        "connect_four"
    }

    fn legal_actions(&self, state: &ConnectFourState) -> Vec<usize> {
        legal_columns(state)
    }

    fn apply_action(&mut self, state: &ConnectFourState, action: &usize) -> ConnectFourState {
        drop_piece(state, *action)
    }
}
