//! Number guessing.
//!
//! A secret integer is drawn uniformly from an inclusive range. The
//! player guesses until correct, told "too low" or "too high" each time.
//! `q` gives up and reveals the number.

mod game;

pub use game::{NumberGuess, ATTEMPTS};
