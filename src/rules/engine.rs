//! Rules trait for game implementations.
//!
//! Games implement `Rules` to define their rules:
//! - How raw text is validated into a `Move`
//! - How a move changes the state
//! - Win/loss conditions
//! - What the player is shown

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ErrorKind, GameRng, GameState, Hand, InputError, Move, Phase};
use crate::games::slots::Symbol;
use crate::games::GameKind;

/// Result of evaluating one round.
///
/// `delta` is the net change to the player's score or balance for the
/// round. Whether a `Win` or `Lose` also ends the session is decided by
/// the game through the state's `Phase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The round resolved without a winner; keep playing.
    Continue,
    /// The player won the round.
    Win { delta: i64 },
    /// The player lost the round.
    Lose { delta: i64 },
    /// Neither side won the round.
    Draw,
    /// The move was not acceptable; nothing changed.
    Invalid(ErrorKind),
}

impl Outcome {
    /// Net change to the player's score or balance.
    #[must_use]
    pub fn delta(&self) -> i64 {
        match self {
            Outcome::Win { delta } | Outcome::Lose { delta } => *delta,
            _ => 0,
        }
    }
}

/// Game-specific detail about a resolved round, for the reporter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    #[default]
    None,
    /// Hangman: positions revealed by the letter (empty on a miss).
    Letter {
        letter: char,
        positions: SmallVec<[usize; 4]>,
    },
    /// Number guesser: guess below the secret.
    TooLow,
    /// Number guesser: guess above the secret.
    TooHigh,
    /// Number guesser: guess equals the secret.
    Correct,
    /// Slot machine: the drawn row and what it paid.
    Spin { row: [Symbol; 3], payout: u64 },
    /// Rock-paper-scissors: both hands.
    Throw { player: Hand, computer: Hand },
    /// Bank: balance shown, in cents.
    Balance(u64),
    /// Bank: amount deposited, in cents.
    Deposited(u64),
    /// Bank: amount withdrawn, in cents.
    Withdrew(u64),
}

/// Rules trait.
///
/// Games implement this trait to define their rules. The game loop calls
/// these methods each round.
///
/// ## Implementation Notes
///
/// - `validate`: Must not touch the state; rejecting input is free
/// - `resolve`: Works on a private copy of the state; only called for
///   non-quit moves while the session is `Playing`
/// - `prompt`, `report`, `summary`: Pure presentation
pub trait Rules {
    /// Which game these rules implement.
    fn kind(&self) -> GameKind;

    /// Deal a fresh session: counters, secret, phase.
    fn setup(&self, rng: GameRng) -> GameState;

    /// Turn one line of raw input into a move.
    fn validate(&self, state: &GameState, input: &str) -> Result<Move, InputError>;

    /// Apply a non-quit move to the state.
    ///
    /// Set the phase to `Won` or `Lost` when the move ends the game.
    fn resolve(&self, state: &mut GameState, mv: &Move) -> (Outcome, Feedback);

    /// Text shown before reading each line.
    fn prompt(&self, state: &GameState) -> String;

    /// Text shown after a round resolves.
    fn report(&self, state: &GameState, outcome: &Outcome) -> String;

    /// Text shown once the session reaches a terminal phase.
    fn summary(&self, state: &GameState) -> String;

    // === Provided Methods ===

    /// Text shown once when the session starts.
    fn intro(&self, _state: &GameState) -> String {
        String::new()
    }

    /// Text shown when input is rejected.
    fn report_error(&self, _state: &GameState, error: &InputError) -> String {
        error.to_string()
    }

    /// Evaluate a move against a state, returning the next state.
    ///
    /// The input state is left untouched. Quit moves end the session;
    /// moves on a finished session and moves the game rejects leave the
    /// state as it was.
    fn evaluate(&self, state: &GameState, mv: &Move) -> (GameState, Outcome) {
        if state.is_terminal() {
            return (state.clone(), Outcome::Continue);
        }

        let mut next = state.clone();
        let (outcome, feedback) = if mv.is_quit() {
            next.public.phase = Phase::Quit;
            (Outcome::Continue, Feedback::None)
        } else {
            self.resolve(&mut next, mv)
        };

        if let Outcome::Invalid(_) = outcome {
            return (state.clone(), outcome);
        }

        next.public.record(mv.clone(), outcome, feedback);
        (next, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_delta() {
        assert_eq!(Outcome::Win { delta: 190 }.delta(), 190);
        assert_eq!(Outcome::Lose { delta: -10 }.delta(), -10);
        assert_eq!(Outcome::Draw.delta(), 0);
        assert_eq!(Outcome::Continue.delta(), 0);
        assert_eq!(Outcome::Invalid(ErrorKind::OutOfRange).delta(), 0);
    }

    #[test]
    fn test_feedback_serialization() {
        let feedback = Feedback::Letter {
            letter: 'e',
            positions: SmallVec::from_slice(&[1, 4]),
        };

        let json = serde_json::to_string(&feedback).unwrap();
        let deserialized: Feedback = serde_json::from_str(&json).unwrap();

        assert_eq!(feedback, deserialized);
    }
}
