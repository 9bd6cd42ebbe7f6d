//! Core types: state, moves, errors, RNG, configuration.
//!
//! Everything here is shared by all games. Games describe their rules
//! through `crate::rules::Rules` rather than extending these types.

pub mod rng;
pub mod config;
pub mod error;
pub mod moves;
pub mod state;

pub use rng::GameRng;
pub use config::{BankConfig, GamesConfig, GuessConfig, HangmanConfig, RpsConfig, SlotConfig};
pub use error::{ErrorKind, InputError};
pub use moves::{Hand, Move, RoundRecord};
pub use state::{GameState, Phase, PublicState, Secret};
