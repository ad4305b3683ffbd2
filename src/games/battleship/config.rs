//! Battleship configuration: board size, fleet, mode.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Mode};

/// One ship type in the fleet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipSpec {
    pub name: String,
    pub size: usize,
}

impl ShipSpec {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Battleship configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleshipConfig {
    /// Side length of the square board (default: 10).
    pub board_size: usize,

    /// Ships each side places, in placement order.
    pub fleet: Vec<ShipSpec>,

    /// Recorded on the state; both seats are human either way.
    pub mode: Mode,
}

impl Default for BattleshipConfig {
    fn default() -> Self {
        Self {
            board_size: 10,
            fleet: vec![
                ShipSpec::new("Carrier", 5),
                ShipSpec::new("Battleship", 4),
                ShipSpec::new("Cruiser", 3),
                ShipSpec::new("Submarine", 3),
                ShipSpec::new("Destroyer", 2),
            ],
            mode: Mode::Multiplayer,
        }
    }
}

impl BattleshipConfig {
    /// Create a new config with a custom board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Create a new config with a custom fleet.
    pub fn with_fleet(mut self, fleet: Vec<ShipSpec>) -> Self {
        self.fleet = fleet;
        self
    }

    /// Create a new config with a custom mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Check that every ship fits and the fleet is not larger than the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::TooSmall {
                what: "board size",
                min: 1,
            });
        }

        if self.fleet.is_empty() {
            return Err(ConfigError::Empty { what: "ships" });
        }

        for ship in &self.fleet {
            if ship.size == 0 || ship.size > self.board_size {
                return Err(ConfigError::ShipTooLarge {
                    ship: ship.name.clone(),
                    size: ship.size,
                    board_size: self.board_size,
                });
            }
        }

        let cells: usize = self.fleet.iter().map(|s| s.size).sum();
        if cells > self.board_size * self.board_size {
            return Err(ConfigError::FleetTooLarge {
                cells,
                board_size: self.board_size,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BattleshipConfig::default();
        assert_eq!(config.board_size, 10);
        assert_eq!(config.fleet.len(), 5);
        assert_eq!(config.fleet.iter().map(|s| s.size).sum::<usize>(), 17);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BattleshipConfig::default()
            .with_board_size(4)
            .with_fleet(vec![ShipSpec::new("Patrol", 2)])
            .with_mode(Mode::Singleplayer);

        assert_eq!(config.board_size, 4);
        assert_eq!(config.fleet, vec![ShipSpec::new("Patrol", 2)]);
        assert_eq!(config.mode, Mode::Singleplayer);
    }

    #[test]
    fn test_validate_rejects_oversized_ship() {
        let config = BattleshipConfig::default().with_board_size(4);
        assert!(matches!(config.validate(), Err(ConfigError::ShipTooLarge { size: 5, .. })));
    }

    #[test]
    fn test_validate_rejects_crowded_board() {
        let config = BattleshipConfig::default()
            .with_board_size(2)
            .with_fleet(vec![ShipSpec::new("A", 2), ShipSpec::new("B", 2), ShipSpec::new("C", 1)]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::FleetTooLarge { cells: 5, board_size: 2 })
        );
    }

    #[test]
    fn test_validate_rejects_empty_fleet() {
        let config = BattleshipConfig::default().with_fleet(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::Empty { what: "ships" }));
    }

    #[test]
    fn test_serialization() {
        let config = BattleshipConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BattleshipConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
