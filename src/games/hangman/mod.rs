//! Hangman.
//!
//! - A hidden word is drawn from a word list
//! - Each round the player guesses one letter
//! - Hits reveal every matching position, misses add a gallows stage
//! - Solving the word wins; the sixth miss loses

mod game;
mod words;

pub use game::{Hangman, GALLOWS, WRONG_GUESSES};
pub use words::{choose_one, WORDS};
