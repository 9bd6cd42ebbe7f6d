//! Number guessing implementation.

use std::cmp::Ordering;

use tracing::trace;

use crate::core::{ErrorKind, GameRng, GameState, GuessConfig, InputError, Move, Phase, Secret};
use crate::games::GameKind;
use crate::rules::{Feedback, Outcome, Rules};

/// Counter key for valid guesses made so far.
pub const ATTEMPTS: &str = "attempts";

const QUIT: &str = "q";

/// Number guessing rules.
#[derive(Clone, Debug, Default)]
pub struct NumberGuess {
    config: GuessConfig,
}

impl NumberGuess {
    pub fn new(config: GuessConfig) -> Self {
        assert!(
            config.lower <= config.upper,
            "Lower bound must not exceed upper bound"
        );
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GuessConfig {
        &self.config
    }

    /// Start a session with a known secret.
    pub fn deal(&self, secret: u32, rng: GameRng) -> GameState {
        let mut state = GameState::new(GameKind::NumberGuess, rng);
        state.secret = Secret::Number(secret);
        state.public.set_counter(ATTEMPTS, 0);
        state
    }

    #[must_use]
    pub fn attempts(state: &GameState) -> i64 {
        state.public.counter(ATTEMPTS)
    }

    fn out_of_range(&self, value: i64) -> InputError {
        InputError::out_of_range(
            "guess",
            value,
            i64::from(self.config.lower),
            i64::from(self.config.upper),
        )
    }
}

impl Rules for NumberGuess {
    fn kind(&self) -> GameKind {
        GameKind::NumberGuess
    }

    fn setup(&self, mut rng: GameRng) -> GameState {
        let secret = rng.gen_range_inclusive(self.config.lower..=self.config.upper);
        trace!(lower = self.config.lower, upper = self.config.upper, "drew secret number");
        self.deal(secret, rng)
    }

    fn validate(&self, _state: &GameState, input: &str) -> Result<Move, InputError> {
        let guess = input.trim();

        if guess.eq_ignore_ascii_case(QUIT) {
            return Ok(Move::Quit);
        }

        if guess.is_empty() || !guess.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::invalid(guess, "a whole number or q"));
        }

        // All digits, so the only parse failure left is overflow.
        let Ok(value) = guess.parse::<i64>() else {
            return Err(InputError::too_large("guess", guess, i64::from(self.config.upper)));
        };
        match u32::try_from(value) {
            Ok(n) if (self.config.lower..=self.config.upper).contains(&n) => Ok(Move::Guess(n)),
            _ => Err(self.out_of_range(value)),
        }
    }

    fn resolve(&self, state: &mut GameState, mv: &Move) -> (Outcome, Feedback) {
        let (Move::Guess(guess), Some(secret)) = (mv, state.number()) else {
            return (Outcome::Invalid(ErrorKind::InvalidFormat), Feedback::None);
        };

        state.public.add_counter(ATTEMPTS, 1);

        match guess.cmp(&secret) {
            Ordering::Less => (Outcome::Continue, Feedback::TooLow),
            Ordering::Greater => (Outcome::Continue, Feedback::TooHigh),
            Ordering::Equal => {
                state.public.phase = Phase::Won;
                (Outcome::Win { delta: 0 }, Feedback::Correct)
            }
        }
    }

    fn intro(&self, _state: &GameState) -> String {
        "----Number Guessing Game----".to_string()
    }

    fn prompt(&self, _state: &GameState) -> String {
        format!(
            "Guess a number between {} and {} (q to quit): ",
            self.config.lower, self.config.upper
        )
    }

    fn report(&self, state: &GameState, _outcome: &Outcome) -> String {
        let verdict = match state.public.last_round().map(|r| &r.feedback) {
            Some(Feedback::TooLow) => "Too Low! Try again.",
            Some(Feedback::TooHigh) => "Too High! Try again.",
            Some(Feedback::Correct) => "Correct!",
            _ => return String::new(),
        };
        format!("{verdict}\nNumber of guesses: {}", Self::attempts(state))
    }

    fn summary(&self, state: &GameState) -> String {
        let secret = state.number().unwrap_or_default();
        let attempts = Self::attempts(state);
        match state.phase() {
            Phase::Won => format!("The answer is {secret}. You got it in {attempts} guesses."),
            _ => format!("Number of guesses: {attempts}\nThe correct answer was {secret}\nBye"),
        }
    }

    fn report_error(&self, _state: &GameState, error: &InputError) -> String {
        match error {
            InputError::InvalidFormat { .. } => "Guess should be a whole number".to_string(),
            other => other.to_string(),
        }
    }
}
