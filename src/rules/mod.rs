//! Rules trait for game implementations.
//!
//! Games implement `Rules` to define:
//! - How raw input becomes a `Move`
//! - How a move changes the state
//! - How state and outcomes are shown to the player
//!
//! The game loop calls into `Rules` but never interprets game-specific
//! concepts directly.

pub mod engine;

pub use engine::{Feedback, Outcome, Rules};
