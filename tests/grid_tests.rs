//! Tic-Tac-Toe and Connect-Four integration tests.
//!
//! Scripted games through the public transitions, plus random play checked
//! with proptest.

mod common;

use playground_engine::games::connect_four::{self, drop_piece, ConnectFour, COLS, ROWS};
use playground_engine::games::tictactoe::{self, make_move, TicTacToe};
use playground_engine::{random_playout, GameResult, GameRng, Mode, Player, RulesEngine, Status};
use proptest::prelude::*;

/// Test the classic top-row win for P1.
#[test]
fn test_tictactoe_top_row_win() {
    common::init_tracing();

    let state = [0, 4, 1, 5, 2]
        .into_iter()
        .fold(tictactoe::new_game(Some(Mode::Multiplayer)), |s, cell| make_move(&s, cell));

    assert_eq!(state.status, Status::Win);
    assert_eq!(state.winner, Some(Player::P1));
    assert_eq!(state.current_player, Player::P1);
    assert_eq!(tictactoe::winning_line(&state.board), Some([0, 1, 2]));
}

/// Test a full board with no line ends in a draw.
#[test]
fn test_tictactoe_draw() {
    // X O X / X O O / O X X
    let state = [0, 1, 2, 4, 3, 5, 7, 6, 8]
        .into_iter()
        .fold(tictactoe::new_game(None), |s, cell| make_move(&s, cell));

    assert_eq!(state.status, Status::Draw);
    assert_eq!(state.winner, None);
    assert!(tictactoe::legal_moves(&state).is_empty());
}

/// Test occupied and out-of-range cells leave the state untouched.
#[test]
fn test_tictactoe_illegal_moves_are_noops() {
    let state = make_move(&tictactoe::new_game(None), 4);
    assert_eq!(make_move(&state, 4), state);
    assert_eq!(make_move(&state, 9), state);
}

/// Test pieces stack from the bottom of a column.
#[test]
fn test_connect_four_gravity() {
    let state = drop_piece(&connect_four::new_game(None), 3);
    assert_eq!(state.board[ROWS - 1][3], Some(Player::P1));
    assert_eq!(state.current_player, Player::P2);

    let state = drop_piece(&state, 3);
    assert_eq!(state.board[ROWS - 2][3], Some(Player::P2));
    assert_eq!(state.current_player, Player::P1);
}

/// Test a full column rejects the drop without changing the turn.
#[test]
fn test_connect_four_full_column() {
    let full = (0..ROWS).fold(connect_four::new_game(None), |s, _| drop_piece(&s, 0));
    assert!(full.board.iter().all(|row| row[0].is_some()));
    assert_eq!(drop_piece(&full, 0), full);
    assert!(!connect_four::legal_columns(&full).contains(&0));
}

/// Test a vertical four wins for the player who completed it.
#[test]
fn test_connect_four_vertical_win() {
    let state = [0, 1, 0, 1, 0, 1, 0]
        .into_iter()
        .fold(connect_four::new_game(None), |s, col| drop_piece(&s, col));

    assert_eq!(state.status, Status::Win);
    assert_eq!(state.winner, Some(Player::P1));
    assert_eq!(drop_piece(&state, 2), state);
}

/// Test the engine trait agrees with the free functions.
#[test]
fn test_engines_report_results() {
    let mut engine = TicTacToe;
    let state = [0, 4, 1, 5, 2]
        .into_iter()
        .fold(tictactoe::new_game(None), |s, cell| engine.apply_action(&s, &cell));
    assert_eq!(engine.is_terminal(&state), Some(GameResult::Winner(Player::P1)));

    let state = connect_four::new_game(None);
    assert_eq!(ConnectFour.legal_actions(&state), (0..COLS).collect::<Vec<_>>());
}

proptest! {
    /// No reachable Tic-Tac-Toe board has two winners, and play stops at the first.
    #[test]
    fn prop_tictactoe_single_winner(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let playout = random_playout(&mut TicTacToe, &tictactoe::new_game(None), &mut rng, 0);

        prop_assert!(playout.last().is_terminal());
        prop_assert!(playout.steps <= 9);
        for state in &playout.states {
            let owners: Vec<Player> = tictactoe::LINES
                .iter()
                .filter_map(|line| {
                    let first = state.board[line[0]]?;
                    line.iter().all(|&i| state.board[i] == Some(first)).then_some(first)
                })
                .collect();
            prop_assert!(owners.windows(2).all(|w| w[0] == w[1]));
            if state.status == Status::Win {
                prop_assert_eq!(state.winner, tictactoe::check_winner(&state.board));
            }
        }
    }

    /// Connect-Four random games end with at most one winner and never overfill.
    #[test]
    fn prop_connect_four_single_winner(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let playout = random_playout(&mut ConnectFour, &connect_four::new_game(None), &mut rng, 0);
        let last = playout.last();

        prop_assert!(last.is_terminal());
        prop_assert!(playout.steps <= ROWS * COLS);
        match last.status {
            Status::Win => {
                prop_assert_eq!(last.winner, connect_four::check_winner(&last.board));
            }
            Status::Draw => {
                prop_assert!(connect_four::check_draw(&last.board));
            }
            other => {
                prop_assert!(false, "unexpected status {:?}", other);
            }
        }

        // Only the winner has a run of four.
        if let Some(winner) = last.winner {
            let mut board = last.board;
            for row in board.iter_mut() {
                for cell in row.iter_mut() {
                    if *cell == Some(winner) {
                        *cell = None;
                    }
                }
            }
            prop_assert_eq!(connect_four::check_winner(&board), None);
        }
    }

    /// Replaying an illegal Tic-Tac-Toe move twice equals replaying it once.
    #[test]
    fn prop_tictactoe_rejection_idempotent(seed in any::<u64>(), steps in 0usize..9, cell in 0usize..12) {
        let mut rng = GameRng::new(seed);
        let state = random_playout(&mut TicTacToe, &tictactoe::new_game(None), &mut rng, steps)
            .last()
            .clone();

        let once = make_move(&state, cell);
        if once == state {
            prop_assert_eq!(make_move(&once, cell), once);
        }
    }
}
