//! Rock-paper-scissors against a uniformly random computer.
//!
//! Each round's winner scores; draws score nothing. The session runs
//! until the player quits, then both scores decide the overall verdict.

mod game;

pub use game::{RockPaperScissors, COMPUTER_SCORE, SCORE};
