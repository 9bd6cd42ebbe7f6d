//! Game configuration types.
//!
//! Each game reads its tunables from a small config struct:
//! - `HangmanConfig`: word list and wrong-guess ceiling
//! - `GuessConfig`: inclusive range for the secret number
//! - `SlotConfig`: starting balance and reel weights
//! - `RpsConfig`: points per won round
//! - `BankConfig`: opening balance
//!
//! `GamesConfig` bundles all of them so a front end can build any game.

use serde::{Deserialize, Serialize};

use crate::games::hangman::WORDS;

/// Hangman configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Candidate answers. Lowercase ASCII letters only.
    pub words: Vec<String>,

    /// Wrong guesses that end the game (one gallows stage each).
    pub max_wrong_guesses: i64,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            words: WORDS.iter().map(|w| (*w).to_string()).collect(),
            max_wrong_guesses: 6,
        }
    }
}

impl HangmanConfig {
    /// Replace the word list.
    ///
    /// Words are lowercased; entries with anything but ASCII letters are
    /// dropped.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();
        assert!(!self.words.is_empty(), "Word list must not be empty");
        self
    }
}

/// Number guesser configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessConfig {
    /// Smallest possible secret (inclusive).
    pub lower: u32,
    /// Largest possible secret (inclusive).
    pub upper: u32,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self { lower: 1, upper: 10 }
    }
}

impl GuessConfig {
    /// Set the inclusive range.
    #[must_use]
    pub fn with_range(mut self, lower: u32, upper: u32) -> Self {
        assert!(lower <= upper, "Lower bound must not exceed upper bound");
        self.lower = lower;
        self.upper = upper;
        self
    }
}

/// Slot machine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Balance at the start of the session.
    pub starting_balance: u64,

    /// Relative reel weight per symbol, in `Symbol::ALL` order.
    pub weights: [f32; 5],
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            starting_balance: 100,
            weights: [1.0; 5],
        }
    }
}

impl SlotConfig {
    /// Largest starting balance a session accepts.
    pub const MAX_BALANCE: u64 = 1_000_000_000_000_000;

    #[must_use]
    pub fn with_balance(mut self, balance: u64) -> Self {
        assert!(balance > 0, "Starting balance must be positive");
        assert!(
            balance <= Self::MAX_BALANCE,
            "Starting balance must not exceed {}",
            Self::MAX_BALANCE
        );
        self.starting_balance = balance;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: [f32; 5]) -> Self {
        assert!(
            weights.iter().all(|w| *w >= 0.0) && weights.iter().any(|w| *w > 0.0),
            "Weights must be non-negative with at least one positive"
        );
        self.weights = weights;
        self
    }
}

/// Rock-paper-scissors configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsConfig {
    /// Points awarded to the winner of a round.
    pub win_points: i64,
}

impl Default for RpsConfig {
    fn default() -> Self {
        Self { win_points: 5 }
    }
}

/// Bank configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConfig {
    /// Opening balance in cents.
    pub starting_cents: u64,
}

impl BankConfig {
    #[must_use]
    pub fn with_balance_cents(mut self, cents: u64) -> Self {
        self.starting_cents = cents;
        self
    }
}

/// Configuration for every game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GamesConfig {
    pub hangman: HangmanConfig,
    pub guess: GuessConfig,
    pub slots: SlotConfig,
    pub rps: RpsConfig,
    pub bank: BankConfig,
}
