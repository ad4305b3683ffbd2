//! Two-board Battleship with a setup phase per side.
//!
//! ## Phases
//!
//! `SetupP1 -> SetupP2 -> InProgress -> Finished`, forward only. Each side
//! places its fleet (ships can be moved until the side calls
//! `finish_setup`), then the sides alternate shots until one fleet is sunk.
//!
//! ## Messages
//!
//! Every transition, accepted or rejected, writes
//! `BattleshipBoard::last_action_message` for the UI.

mod board;
mod config;
mod game;

pub use board::{
    can_place_ship, placements, Cell, Orientation, PlayerBoardState, Ship, ShipPosition, ShotMark,
};
pub use config::{BattleshipConfig, ShipSpec};
pub use game::{
    auto_place_fleet, finish_setup, fire_shot, new_game, place_ship, remaining_ships, Battleship,
    BattleshipAction, BattleshipBoard, BattleshipState, Phase,
};
