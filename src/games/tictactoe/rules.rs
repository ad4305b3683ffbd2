//! Win and draw detection for tic-tac-toe.

use crate::core::Player;

use super::game::TicTacToeBoard;

/// Every winning line: rows, columns, then both diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // columns
    [0, 4, 8], [2, 4, 6],            // diagonals
];

/// The first line fully owned by one player, if any.
#[must_use]
pub fn winning_line(board: &TicTacToeBoard) -> Option<[usize; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        board[a].is_some() && board[a] == board[b] && board[b] == board[c]
    })
}

/// Checks if there is a winner on the board.
#[must_use]
pub fn check_winner(board: &TicTacToeBoard) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board[a])
}

/// True when every cell is filled.
#[must_use]
pub fn check_draw(board: &TicTacToeBoard) -> bool {
    board.iter().all(Option::is_some)
}
