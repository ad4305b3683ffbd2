//! Tic-Tac-Toe on a 3x3 grid.
//!
//! Cells are indexed 0-8 in row-major order. `P1` always opens.

mod game;
mod rules;

pub use game::{legal_moves, make_move, new_game, TicTacToe, TicTacToeBoard, TicTacToeState};
pub use rules::{check_draw, check_winner, winning_line, LINES};
