//! Validated player moves and the per-round history record.
//!
//! A `Move` only exists once raw input has passed a game's validator.
//! The evaluator never sees unparsed text.

use serde::{Deserialize, Serialize};

use crate::rules::{Feedback, Outcome};

/// One of the three rock-paper-scissors hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    /// Every hand, in menu order.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// The hand this one defeats.
    #[must_use]
    pub const fn beats(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Hand::Rock => "rock",
            Hand::Paper => "paper",
            Hand::Scissors => "scissors",
        }
    }

    /// Parse a hand name, ignoring case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Hand> {
        Hand::ALL
            .into_iter()
            .find(|hand| hand.as_str().eq_ignore_ascii_case(input))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated input for one round.
///
/// Money amounts are whole units for the slot machine and cents for the
/// bank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Hangman: a lowercase ASCII letter.
    Letter(char),
    /// Number guesser: a guess inside the configured range.
    Guess(u32),
    /// Slot machine: a stake no larger than the balance.
    Bet(u64),
    /// Rock-paper-scissors: the player's hand.
    Throw(Hand),
    /// Bank: show the current balance.
    ShowBalance,
    /// Bank: deposit an amount in cents.
    Deposit(u64),
    /// Bank: withdraw an amount in cents.
    Withdraw(u64),
    /// Leave the session.
    Quit,
}

impl Move {
    #[must_use]
    pub fn is_quit(&self) -> bool {
        matches!(self, Move::Quit)
    }
}

/// A resolved round kept in the session log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub round: u32,

    /// The move that was played.
    pub mv: Move,

    /// How the round resolved.
    pub outcome: Outcome,

    /// Game-specific detail for the reporter.
    pub feedback: Feedback,
}

impl RoundRecord {
    #[must_use]
    pub fn new(round: u32, mv: Move, outcome: Outcome, feedback: Feedback) -> Self {
        Self {
            round,
            mv,
            outcome,
            feedback,
        }
    }
}
