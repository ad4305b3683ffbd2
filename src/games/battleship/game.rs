//! Battleship phases, placement, and firing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ConfigError, GameRng, GameState, Player, PlayerMap, Rejection};
use crate::rules::RulesEngine;

use super::board::{can_place_ship, placements, Cell, Orientation, PlayerBoardState, ShipPosition, ShotMark};
use super::config::BattleshipConfig;

/// Lifecycle phase. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    SetupP1,
    SetupP2,
    InProgress,
    Finished,
}

impl Phase {
    /// The side placing ships, during setup.
    #[must_use]
    pub const fn setup_player(self) -> Option<Player> {
        match self {
            Phase::SetupP1 => Some(Player::P1),
            Phase::SetupP2 => Some(Player::P2),
            Phase::InProgress | Phase::Finished => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Phase::SetupP1 | Phase::SetupP2 => "setup",
            Phase::InProgress => "battle",
            Phase::Finished => "game over",
        }
    }
}

/// Battleship payload for the game envelope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattleshipBoard {
    pub phase: Phase,
    pub board_size: usize,
    pub players: PlayerMap<PlayerBoardState>,
    /// Player-facing description of the last action or rejection.
    pub last_action_message: String,
}

/// Battleship game state.
pub type BattleshipState = GameState<BattleshipBoard>;

/// A Battleship action, for `RulesEngine` drivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleshipAction {
    Place {
        ship_id: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    },
    FinishSetup,
    Fire {
        row: usize,
        col: usize,
    },
}

/// Create a game in `SetupP1` with both fleets unplaced.
pub fn new_game(config: &BattleshipConfig) -> Result<BattleshipState, ConfigError> {
    config.validate()?;

    let board = BattleshipBoard {
        phase: Phase::SetupP1,
        board_size: config.board_size,
        players: PlayerMap::new(|_| PlayerBoardState::new(config)),
        last_action_message: format!("{}, place your ships", Player::P1),
    };

    Ok(GameState::new(board).with_mode(config.mode))
}

fn apply(
    state: &BattleshipState,
    step: impl FnOnce(&BattleshipState) -> Result<BattleshipState, Rejection>,
) -> BattleshipState {
    state.apply_or_else("battleship", step, |s, reason| {
        s.board.last_action_message = reason.to_string();
    })
}

fn ensure_active(state: &BattleshipState) -> Result<(), Rejection> {
    state.ensure_in_progress()?;
    if state.board.phase == Phase::Finished {
        return Err(Rejection::GameOver);
    }
    Ok(())
}

fn setup_side(state: &BattleshipState) -> Result<Player, Rejection> {
    state.board.phase.setup_player().ok_or(Rejection::WrongPhase {
        phase: state.board.phase.label(),
    })
}

/// Place (or move) a ship of the side currently being set up.
///
/// A ship that is already on the board is lifted first, so it may be
/// shifted onto cells it used to cover. If the new spot is invalid the old
/// placement stays and `last_action_message` explains why.
#[must_use]
pub fn place_ship(
    state: &BattleshipState,
    ship_id: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> BattleshipState {
    apply(state, |s| try_place_ship(s, ship_id, row, col, orientation))
}

fn try_place_ship(
    state: &BattleshipState,
    ship_id: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> Result<BattleshipState, Rejection> {
    ensure_active(state)?;
    let side = setup_side(state)?;

    let mut next = state.clone();
    let board = &mut next.board.players[side];
    let index = board
        .ships
        .iter()
        .position(|ship| ship.id == ship_id)
        .ok_or(Rejection::UnknownShip(ship_id))?;

    let moved = board.ships[index].is_placed();
    board.clear_ship(index);

    let ship = &board.ships[index];
    if !can_place_ship(&board.grid, ship.size, row, col, orientation) {
        return Err(Rejection::InvalidPlacement {
            ship: ship.name.clone(),
        });
    }

    let position = ShipPosition { row, col, orientation };
    for (r, c) in position.cells(ship.size) {
        board.grid[r][c] = Cell::Ship;
    }

    let ship = &mut board.ships[index];
    ship.position = Some(position);
    next.board.last_action_message = if moved {
        format!("{} moved", ship.name)
    } else {
        format!("{} placed", ship.name)
    };

    Ok(next)
}

/// Randomly place every unplaced ship of the side being set up.
#[must_use]
pub fn auto_place_fleet(state: &BattleshipState, rng: &mut GameRng) -> BattleshipState {
    apply(state, |s| try_auto_place_fleet(s, rng))
}

fn try_auto_place_fleet(state: &BattleshipState, rng: &mut GameRng) -> Result<BattleshipState, Rejection> {
    ensure_active(state)?;
    let side = setup_side(state)?;

    let unplaced: Vec<_> = state.board.players[side]
        .ships
        .iter()
        .filter(|ship| !ship.is_placed())
        .map(|ship| (ship.id, ship.size, ship.name.clone()))
        .collect();

    let mut next = state.clone();
    for (id, size, name) in unplaced {
        let options = placements(&next.board.players[side].grid, size);
        let spot = rng
            .choose(&options)
            .copied()
            .ok_or(Rejection::InvalidPlacement { ship: name })?;
        next = try_place_ship(&next, id, spot.row, spot.col, spot.orientation)?;
    }

    next.board.last_action_message = format!("{side}'s fleet is in position");
    Ok(next)
}

/// Lock in the current side's fleet and advance the phase.
///
/// Rejected until every ship of the current side is placed.
#[must_use]
pub fn finish_setup(state: &BattleshipState) -> BattleshipState {
    apply(state, try_finish_setup)
}

fn try_finish_setup(state: &BattleshipState) -> Result<BattleshipState, Rejection> {
    ensure_active(state)?;
    let side = setup_side(state)?;

    if !state.board.players[side].all_placed() {
        return Err(Rejection::FleetIncomplete);
    }

    let mut next = state.clone();
    match state.board.phase {
        Phase::SetupP1 => {
            next.board.phase = Phase::SetupP2;
            next.current_player = Player::P2;
            next.board.last_action_message = format!("{}, place your ships", Player::P2);
        }
        _ => {
            next.board.phase = Phase::InProgress;
            next.current_player = Player::P1;
            next.board.last_action_message = format!("Battle begins! {} fires first", Player::P1);
        }
    }

    debug!(phase = ?next.board.phase, "battleship setup advanced");
    Ok(next)
}

/// Fire the current player's shot at the opponent's `(row, col)`.
///
/// The turn passes after every accepted shot, including the one that wins
/// the game.
#[must_use]
pub fn fire_shot(state: &BattleshipState, row: usize, col: usize) -> BattleshipState {
    apply(state, |s| try_fire_shot(s, row, col))
}

fn try_fire_shot(state: &BattleshipState, row: usize, col: usize) -> Result<BattleshipState, Rejection> {
    ensure_active(state)?;
    if state.board.phase != Phase::InProgress {
        return Err(Rejection::WrongPhase {
            phase: state.board.phase.label(),
        });
    }

    let size = state.board.board_size;
    if row >= size || col >= size {
        return Err(Rejection::OutOfBounds {
            position: format!("{row},{col}"),
        });
    }

    let attacker = state.current_player;
    let defender = attacker.opponent();

    if state.board.players[attacker].shots[row][col].is_some() {
        return Err(Rejection::AlreadyFired { row, col });
    }

    let mut next = state.clone();
    let hit = state.board.players[defender].grid[row][col] == Cell::Ship;

    let mut message = if hit {
        next.board.players[attacker].shots[row][col] = Some(ShotMark::Hit);

        let target = &mut next.board.players[defender];
        target.grid[row][col] = Cell::Hit;

        match target.ship_at(row, col) {
            Some(index) => {
                let ship = &mut target.ships[index];
                ship.hits += 1;
                if ship.is_sunk() {
                    format!("Hit! {attacker} sunk the {}!", ship.name)
                } else {
                    "Hit!".to_string()
                }
            }
            None => "Hit!".to_string(),
        }
    } else {
        next.board.players[attacker].shots[row][col] = Some(ShotMark::Miss);
        next.board.players[defender].grid[row][col] = Cell::Miss;
        "Miss.".to_string()
    };

    if next.board.players[defender].all_sunk() {
        next.board.phase = Phase::Finished;
        next.finish_win(attacker);
        message.push_str(&format!(" {attacker} wins! All ships sunk."));
        debug!(winner = %attacker, "battleship won");
    }

    next.board.last_action_message = message;
    next.pass_turn();

    Ok(next)
}

/// Ships of `player` that are still afloat.
#[must_use]
pub fn remaining_ships(state: &BattleshipState, player: Player) -> usize {
    state.board.players[player]
        .ships
        .iter()
        .filter(|ship| !ship.is_sunk())
        .count()
}

/// `RulesEngine` adapter for Battleship.
#[derive(Clone, Copy, Debug, Default)]
pub struct Battleship;

impl RulesEngine for Battleship {
    type Board = BattleshipBoard;
    type Action = BattleshipAction;

    fn name(&self) -> &'static str {
        "battleship"
    }

    fn legal_actions(&self, state: &BattleshipState) -> Vec<BattleshipAction> {
        if ensure_active(state).is_err() {
            return Vec::new();
        }

        if let Some(side) = state.board.phase.setup_player() {
            let board = &state.board.players[side];
            if board.all_placed() {
                return vec![BattleshipAction::FinishSetup];
            }

            // Placed ships may still be moved, which can free room for the rest.
            let mut actions = Vec::new();
            for (index, ship) in board.ships.iter().enumerate() {
                let spots = if ship.is_placed() {
                    let mut lifted = board.clone();
                    lifted.clear_ship(index);
                    placements(&lifted.grid, ship.size)
                } else {
                    placements(&board.grid, ship.size)
                };

                actions.extend(
                    spots
                        .into_iter()
                        .filter(|pos| ship.position != Some(*pos))
                        .map(|pos| BattleshipAction::Place {
                            ship_id: ship.id,
                            row: pos.row,
                            col: pos.col,
                            orientation: pos.orientation,
                        }),
                );
            }
            return actions;
        }

        let shots = &state.board.players[state.current_player].shots;
        let mut actions = Vec::new();
        for (row, cells) in shots.iter().enumerate() {
            for (col, shot) in cells.iter().enumerate() {
                if shot.is_none() {
                    actions.push(BattleshipAction::Fire { row, col });
                }
            }
        }
        actions
    }

    fn apply_action(&mut self, state: &BattleshipState, action: &BattleshipAction) -> BattleshipState {
        match *action {
            BattleshipAction::Place {
                ship_id,
                row,
                col,
                orientation,
            } => place_ship(state, ship_id, row, col, orientation),
            BattleshipAction::FinishSetup => finish_setup(state),
            BattleshipAction::Fire { row, col } => fire_shot(state, row, col),
        }
    }
}
