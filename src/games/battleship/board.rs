//! Per-side Battleship board: ship grid, fleet, and fired shots.

use serde::{Deserialize, Serialize};

use super::config::BattleshipConfig;

/// Ship direction from its origin cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Extends to the right (increasing column).
    Horizontal,
    /// Extends downwards (increasing row).
    Vertical,
}

/// Where a ship sits: origin plus orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipPosition {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl ShipPosition {
    /// The `size` cells covered from this origin.
    pub fn cells(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    /// Whether `(row, col)` lies within the span of a ship of `size`.
    #[must_use]
    pub fn contains(self, size: usize, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => row == self.row && col >= self.col && col < self.col + size,
            Orientation::Vertical => col == self.col && row >= self.row && row < self.row + size,
        }
    }
}

/// One cell of a side's own grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    /// Ship cell that has been hit.
    Hit,
    /// Open water the opponent fired at.
    Miss,
}

/// Result recorded on the attacker's shots grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotMark {
    Hit,
    Miss,
}

/// A ship in a side's fleet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ship {
    pub id: usize,
    pub name: String,
    pub size: usize,
    pub hits: usize,
    pub position: Option<ShipPosition>,
}

impl Ship {
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    #[must_use]
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.size
    }

    /// Whether this ship is placed over `(row, col)`.
    #[must_use]
    pub fn occupies(&self, row: usize, col: usize) -> bool {
        self.position
            .is_some_and(|pos| pos.contains(self.size, row, col))
    }
}

/// Everything one side owns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerBoardState {
    /// Own ships and incoming damage, `grid[row][col]`.
    pub grid: Vec<Vec<Cell>>,

    pub ships: Vec<Ship>,

    /// This side's shots at the opponent.
    pub shots: Vec<Vec<Option<ShotMark>>>,
}

impl PlayerBoardState {
    /// Empty board with the configured fleet, nothing placed.
    #[must_use]
    pub fn new(config: &BattleshipConfig) -> Self {
        let n = config.board_size;
        let ships = config
            .fleet
            .iter()
            .enumerate()
            .map(|(i, spec)| Ship {
                id: i,
                name: spec.name.clone(),
                size: spec.size,
                hits: 0,
                position: None,
            })
            .collect();

        Self {
            grid: vec![vec![Cell::Empty; n]; n],
            ships,
            shots: vec![vec![None; n]; n],
        }
    }

    #[must_use]
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    #[must_use]
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Index into `ships` of the ship covering `(row, col)`.
    #[must_use]
    pub fn ship_at(&self, row: usize, col: usize) -> Option<usize> {
        self.ships.iter().position(|ship| ship.occupies(row, col))
    }

    /// Reset the cells under `ships[index]` to open water.
    pub(crate) fn clear_ship(&mut self, index: usize) {
        let ship = &self.ships[index];
        if let Some(pos) = ship.position {
            for (r, c) in pos.cells(ship.size) {
                self.grid[r][c] = Cell::Empty;
            }
        }
    }
}

/// True when all `size` cells from the origin are on the board and empty.
#[must_use]
pub fn can_place_ship(
    grid: &[Vec<Cell>],
    size: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> bool {
    if size == 0 {
        return false;
    }

    ShipPosition { row, col, orientation }
        .cells(size)
        .all(|(r, c)| {
            grid.get(r)
                .and_then(|cells| cells.get(c))
                .is_some_and(|cell| *cell == Cell::Empty)
        })
}

/// Every valid origin and orientation for a ship of `size`.
#[must_use]
pub fn placements(grid: &[Vec<Cell>], size: usize) -> Vec<ShipPosition> {
    let mut out = Vec::new();
    for row in 0..grid.len() {
        for col in 0..grid[row].len() {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                if can_place_ship(grid, size, row, col, orientation) {
                    out.push(ShipPosition { row, col, orientation });
                }
            }
        }
    }
    out
}
