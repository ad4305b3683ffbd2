//! Four-in-a-row detection.

use crate::core::Player;

use super::game::{ConnectFourBoard, COLS, ROWS};

/// Pieces needed in a row to win.
pub const RUN: usize = 4;

/// Scan directions: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Cells of the first complete run found, scanning from the top-left.
#[must_use]
pub fn winning_cells(board: &ConnectFourBoard) -> Option<[(usize, usize); RUN]> {
    for row in 0..ROWS {
        for col in 0..COLS {
            let Some(owner) = board[row][col] else {
                continue;
            };

            for (dr, dc) in DIRECTIONS {
                if let Some(cells) = run_from(board, owner, row, col, dr, dc) {
                    return Some(cells);
                }
            }
        }
    }

    None
}

fn run_from(
    board: &ConnectFourBoard,
    owner: Player,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
) -> Option<[(usize, usize); RUN]> {
    let mut cells = [(row, col); RUN];

    for (step, cell) in cells.iter_mut().enumerate().skip(1) {
        let r = row.checked_add_signed(dr * step as isize)?;
        let c = col.checked_add_signed(dc * step as isize)?;
        if r >= ROWS || c >= COLS || board[r][c] != Some(owner) {
            return None;
        }
        *cell = (r, c);
    }

    Some(cells)
}

/// The owner of the first complete run, if any.
#[must_use]
pub fn check_winner(board: &ConnectFourBoard) -> Option<Player> {
    winning_cells(board).and_then(|cells| {
        let (r, c) = cells[0];
        board[r][c]
    })
}

/// True when the top row is full (no column accepts a piece).
#[must_use]
pub fn check_draw(board: &ConnectFourBoard) -> bool {
    board[0].iter().all(Option::is_some)
}
