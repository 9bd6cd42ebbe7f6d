//! Game implementations.
//!
//! Each game implements `Rules`. `Game` wraps them in one tagged enum so a
//! front end can pick a game at runtime and drive it through a single
//! interface.

pub mod bank;
pub mod guess;
pub mod hangman;
pub mod rps;
pub mod slots;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, GamesConfig, InputError, Move};
use crate::rules::{Feedback, Outcome, Rules};

pub use bank::Bank;
pub use guess::NumberGuess;
pub use hangman::Hangman;
pub use rps::RockPaperScissors;
pub use slots::SlotMachine;

/// Which game a session plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Hangman,
    NumberGuess,
    Slots,
    RockPaperScissors,
    Bank,
}

impl GameKind {
    pub const ALL: [GameKind; 5] = [
        GameKind::Hangman,
        GameKind::NumberGuess,
        GameKind::Slots,
        GameKind::RockPaperScissors,
        GameKind::Bank,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::Hangman => "hangman",
            GameKind::NumberGuess => "guess",
            GameKind::Slots => "slots",
            GameKind::RockPaperScissors => "rps",
            GameKind::Bank => "bank",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Any game, selected at runtime.
#[derive(Clone, Debug)]
pub enum Game {
    Hangman(Hangman),
    NumberGuess(NumberGuess),
    Slots(SlotMachine),
    RockPaperScissors(RockPaperScissors),
    Bank(Bank),
}

impl Game {
    /// Build the rules for `kind` from the shared configuration.
    pub fn from_config(kind: GameKind, config: &GamesConfig) -> Self {
        match kind {
            GameKind::Hangman => Game::Hangman(Hangman::new(config.hangman.clone())),
            GameKind::NumberGuess => Game::NumberGuess(NumberGuess::new(config.guess)),
            GameKind::Slots => Game::Slots(SlotMachine::new(config.slots.clone())),
            GameKind::RockPaperScissors => {
                Game::RockPaperScissors(RockPaperScissors::new(config.rps))
            }
            GameKind::Bank => Game::Bank(Bank::new(config.bank)),
        }
    }
}

macro_rules! dispatch {
    ($game:expr, $rules:ident => $call:expr) => {
        match $game {
            Game::Hangman($rules) => $call,
            Game::NumberGuess($rules) => $call,
            Game::Slots($rules) => $call,
            Game::RockPaperScissors($rules) => $call,
            Game::Bank($rules) => $call,
        }
    };
}

impl Rules for Game {
    fn kind(&self) -> GameKind {
        dispatch!(self, g => g.kind())
    }

    fn setup(&self, rng: GameRng) -> GameState {
        dispatch!(self, g => g.setup(rng))
    }

    fn validate(&self, state: &GameState, input: &str) -> Result<Move, InputError> {
        dispatch!(self, g => g.validate(state, input))
    }

    fn resolve(&self, state: &mut GameState, mv: &Move) -> (Outcome, Feedback) {
        dispatch!(self, g => g.resolve(state, mv))
    }

    fn prompt(&self, state: &GameState) -> String {
        dispatch!(self, g => g.prompt(state))
    }

    fn report(&self, state: &GameState, outcome: &Outcome) -> String {
        dispatch!(self, g => g.report(state, outcome))
    }

    fn summary(&self, state: &GameState) -> String {
        dispatch!(self, g => g.summary(state))
    }

    fn intro(&self, state: &GameState) -> String {
        dispatch!(self, g => g.intro(state))
    }

    fn report_error(&self, state: &GameState, error: &InputError) -> String {
        dispatch!(self, g => g.report_error(state, error))
    }
}
