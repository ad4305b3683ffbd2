//! Connect-Four with gravity on a 6x7 grid.
//!
//! Row 0 is the top of the board; a dropped piece settles in the lowest
//! empty row of its column.

mod game;
mod rules;

pub use game::{
    drop_piece, landing_row, legal_columns, new_game, ConnectFour, ConnectFourBoard, ConnectFourState,
    COLS, ROWS,
};
pub use rules::{check_draw, check_winner, winning_cells, RUN};
