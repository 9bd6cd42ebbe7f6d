//! # console-games
//!
//! Round-based interactive console games sharing one game loop.
//!
//! ## Design Principles
//!
//! 1. **One Loop**: Every game runs through the same cycle of
//!    validate → evaluate → report → termination check.
//!
//! 2. **Pure Rounds**: Evaluating a move never mutates the input state. It
//!    returns the next state and the round's `Outcome`. Randomness lives in
//!    the state's own RNG, so a round is reproducible from its state.
//!
//! 3. **Recoverable Input**: Bad input is classified (`InvalidFormat`,
//!    `OutOfRange`, `Duplicate`), reported and asked for again. It never
//!    changes the state and never ends a session.
//!
//! ## Modules
//!
//! - `core`: State, moves, input errors, RNG, configuration
//! - `rules`: `Rules` trait, round `Outcome` and `Feedback`
//! - `games`: Hangman, number guessing, slots, rock-paper-scissors, bank
//! - `session`: The game loop over any reader and writer
//! - `report`: Text helpers shared by the reporters

pub mod core;
pub mod rules;
pub mod games;
pub mod session;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    GameRng,
    GamesConfig, HangmanConfig, GuessConfig, SlotConfig, RpsConfig, BankConfig,
    ErrorKind, InputError,
    Hand, Move, RoundRecord,
    GameState, Phase, PublicState, Secret,
};

pub use crate::rules::{Feedback, Outcome, Rules};

pub use crate::games::{
    Game, GameKind,
    Hangman, NumberGuess, SlotMachine, RockPaperScissors, Bank,
};

pub use crate::session::Session;
