//! Slot machine.
//!
//! - The player starts with a balance and bets part of it each round
//! - Three reels each draw a symbol from a weighted set
//! - Three of a kind pays the bet times the symbol's multiplier
//! - Running out of money loses; `q` cashes out

mod game;
mod symbol;

pub use game::{SlotMachine, BALANCE};
pub use symbol::Symbol;
