//! Shared contract: seats, the generic game envelope, RNG, rejections.
//!
//! Everything here is game-agnostic. Individual games live under `games`
//! and only depend on this module and `rules`.

pub mod player;
pub mod rng;
pub mod state;
pub mod error;
pub mod locale;

pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Mode, Status};
pub use error::{ConfigError, Rejection};
