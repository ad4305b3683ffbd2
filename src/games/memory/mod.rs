//! Memory-match: flip two cards, keep them if they match.

mod game;

pub use game::{
    check_match, flip_card, matched_pairs, new_game, Card, MemoryAction, MemoryBoard, MemoryConfig, MemoryMatch,
    MemoryState,
};
