//! Reasons a transition or an initializer refuses its input.
//!
//! Transitions never surface these to the caller directly: each game runs a
//! fallible inner step and maps `Err` back to the unchanged state. The
//! `Display` text doubles as the player-facing message for games that carry
//! one (Battleship, Wordle).

use thiserror::Error;

/// Why a player action was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("The game is already over")]
    GameOver,

    #[error("Square {index} is already taken")]
    CellOccupied { index: usize },

    #[error("Column {column} is full")]
    ColumnFull { column: usize },

    #[error("Position {position} is off the board")]
    OutOfBounds { position: String },

    #[error("That action is not allowed during {phase}")]
    WrongPhase { phase: &'static str },

    #[error("Unknown ship {0}")]
    UnknownShip(usize),

    #[error("The {ship} does not fit there")]
    InvalidPlacement { ship: String },

    #[error("Place all your ships before continuing")]
    FleetIncomplete,

    #[error("You already fired at {row},{col}")]
    AlreadyFired { row: usize, col: usize },

    #[error("Card {index} cannot be flipped")]
    CardUnavailable { index: usize },

    #[error("Two cards are already face up")]
    PairAlreadyFlipped,

    #[error("Flip two cards first")]
    PairIncomplete,

    #[error("Guess {guess} is outside {min}-{max}")]
    GuessOutOfRange { guess: u32, min: u32, max: u32 },

    #[error("'{0}' is not a letter")]
    NotALetter(char),

    #[error("'{0}' was already guessed")]
    AlreadyGuessed(char),

    #[error("Word must be {expected} letters")]
    WrongLength { expected: usize, actual: usize },

    #[error("Not in word list")]
    NotInWordList(String),

    #[error("The row is full")]
    RowFull,

    #[error("Nothing to delete")]
    RowEmpty,

    #[error("'{0}' is not one of the options")]
    UnknownOption(String),
}

/// Why a game configuration cannot produce a playable game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("number range {min}-{max} is empty")]
    EmptyRange { min: u32, max: u32 },

    #[error("number range {min}-{max} is wider than {limit} values")]
    RangeTooWide { min: u32, max: u32, limit: u32 },

    #[error("{what} must be at least {min}")]
    TooSmall { what: &'static str, min: usize },

    #[error("no {what} available")]
    Empty { what: &'static str },

    #[error("ship '{ship}' of size {size} does not fit on a {board_size}x{board_size} board")]
    ShipTooLarge {
        ship: String,
        size: usize,
        board_size: usize,
    },

    #[error("fleet of {cells} cells does not fit on a {board_size}x{board_size} board")]
    FleetTooLarge { cells: usize, board_size: usize },

    #[error("no words of length {length} in the dictionary")]
    NoWordsOfLength { length: usize },

    #[error("location '{name}' does not list its own name among its options")]
    AnswerNotOffered { name: String },
}
