//! Game state: what the player can see and what stays hidden.
//!
//! ## PublicState
//!
//! Observable information:
//! - Session phase and round number
//! - Named counters (score, balance, wrong guesses, attempts)
//! - History of used inputs (guessed letters)
//! - Round log
//!
//! ## GameState
//!
//! Complete state including:
//! - Public state
//! - The hidden secret (hangman word, number to guess)
//! - RNG

use im::{OrdSet, Vector};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::moves::{Move, RoundRecord};
use super::rng::GameRng;
use crate::games::GameKind;
use crate::rules::{Feedback, Outcome};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Rounds are still being played.
    #[default]
    Playing,
    /// The player met the win condition.
    Won,
    /// The player met the lose condition.
    Lost,
    /// The player left (quit sentinel or end of input).
    Quit,
}

impl Phase {
    /// Terminal phases end the game loop.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Playing => "playing",
            Phase::Won => "won",
            Phase::Lost => "lost",
            Phase::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// Public session state.
///
/// Uses `im` persistent data structures so the evaluator can clone the
/// state every round without copying the whole history.
///
/// ## Counters (i64 only)
///
/// Games define their own counter keys. Counters are never negative:
/// losses show up in the round `Outcome`, not as a negative balance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicState {
    /// Which game this session plays.
    pub kind: GameKind,

    /// Current phase.
    pub phase: Phase,

    /// Number of resolved rounds.
    pub round: u32,

    /// Per-game counters (score, balance, ...).
    counters: FxHashMap<String, i64>,

    /// Inputs already consumed this session.
    pub history: OrdSet<String>,

    /// Every resolved round, oldest first.
    pub log: Vector<RoundRecord>,
}

impl PublicState {
    #[must_use]
    pub fn new(kind: GameKind) -> Self {
        Self {
            kind,
            phase: Phase::Playing,
            round: 0,
            counters: FxHashMap::default(),
            history: OrdSet::new(),
            log: Vector::new(),
        }
    }

    // === Counters ===

    /// Get a counter value, 0 if never set.
    #[must_use]
    pub fn counter(&self, key: &str) -> i64 {
        self.counters.get(key).copied().unwrap_or(0)
    }

    /// Set a counter value.
    pub fn set_counter(&mut self, key: impl Into<String>, value: i64) {
        debug_assert!(value >= 0, "counters never go negative");
        self.counters.insert(key.into(), value);
    }

    /// Modify a counter by delta, returning the new value.
    ///
    /// Saturates at the `i64` bounds. Games bound their moves so that a
    /// counter never gets there.
    pub fn add_counter(&mut self, key: &str, delta: i64) -> i64 {
        let value = self.counter(key).saturating_add(delta);
        self.set_counter(key, value);
        value
    }

    // === History ===

    /// Check whether an input was already consumed.
    #[must_use]
    pub fn has_used(&self, value: &str) -> bool {
        self.history.contains(value)
    }

    /// Remember a consumed input. Returns false if it was already there.
    pub fn remember(&mut self, value: impl Into<String>) -> bool {
        self.history.insert(value.into()).is_none()
    }

    // === Rounds ===

    /// Append a resolved round to the log and bump the round number.
    pub fn record(&mut self, mv: Move, outcome: Outcome, feedback: Feedback) {
        self.round += 1;
        self.log
            .push_back(RoundRecord::new(self.round, mv, outcome, feedback));
    }

    /// The most recently resolved round.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.log.last()
    }
}

/// Hidden information dealt at session start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Secret {
    #[default]
    None,
    /// Hangman answer, lowercase ASCII.
    Word(String),
    /// Number the player has to guess.
    Number(u32),
}

/// Full session state including hidden information.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Public state (shown to the player).
    pub public: PublicState,

    /// Hidden secret.
    pub secret: Secret,

    /// Deterministic RNG.
    pub rng: GameRng,
}

impl GameState {
    /// Create a fresh state for the given game.
    #[must_use]
    pub fn new(kind: GameKind, rng: GameRng) -> Self {
        Self {
            public: PublicState::new(kind),
            secret: Secret::None,
            rng,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.public.phase
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.public.phase.is_terminal()
    }

    /// The hangman answer, if one was dealt.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match &self.secret {
            Secret::Word(word) => Some(word),
            _ => None,
        }
    }

    /// The number to guess, if one was dealt.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        match self.secret {
            Secret::Number(n) => Some(n),
            _ => None,
        }
    }
}
