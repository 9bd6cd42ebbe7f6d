//! Hangman implementation.

use smallvec::SmallVec;
use tracing::trace;

use super::words::choose_one;
use crate::core::{ErrorKind, GameRng, GameState, HangmanConfig, InputError, Move, Phase, Secret};
use crate::games::GameKind;
use crate::report::{boxed, spaced};
use crate::rules::{Feedback, Outcome, Rules};

/// Counter key for misses so far.
pub const WRONG_GUESSES: &str = "wrong_guesses";

/// Gallows drawing per number of wrong guesses.
pub const GALLOWS: [[&str; 3]; 7] = [
    ["   ", "   ", "   "],
    [" o ", "   ", "   "],
    [" 0 ", " | ", "   "],
    [" 0 ", "/| ", "   "],
    [" 0 ", "/|\\", "   "],
    [" 0 ", "/|\\", "/  "],
    [" 0 ", "/|\\", "/ \\"],
];

/// Hangman rules.
#[derive(Clone, Debug)]
pub struct Hangman {
    config: HangmanConfig,
}

impl Hangman {
    pub fn new(config: HangmanConfig) -> Self {
        assert!(!config.words.is_empty(), "Word list must not be empty");
        assert!(config.max_wrong_guesses > 0, "Need at least one wrong guess");
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &HangmanConfig {
        &self.config
    }

    /// Start a session with a known answer.
    pub fn deal(&self, answer: &str, rng: GameRng) -> GameState {
        let mut state = GameState::new(GameKind::Hangman, rng);
        state.secret = Secret::Word(answer.to_ascii_lowercase());
        state.public.set_counter(WRONG_GUESSES, 0);
        state
    }

    #[must_use]
    pub fn wrong_guesses(state: &GameState) -> i64 {
        state.public.counter(WRONG_GUESSES)
    }

    /// The word with unguessed letters blanked: `_ t t _ _`.
    #[must_use]
    pub fn hint(state: &GameState) -> String {
        let word = state.word().unwrap_or_default();
        spaced(word.chars().map(|c| if is_guessed(state, c) { c } else { '_' }))
    }

    /// Every letter of the answer has been guessed.
    #[must_use]
    pub fn is_solved(state: &GameState) -> bool {
        state
            .word()
            .unwrap_or_default()
            .chars()
            .all(|c| is_guessed(state, c))
    }

    fn gallows(&self, state: &GameState) -> String {
        let stage = usize::try_from(Self::wrong_guesses(state))
            .unwrap_or(0)
            .min(GALLOWS.len() - 1);
        boxed(GALLOWS[stage])
    }
}

impl Default for Hangman {
    fn default() -> Self {
        Self::new(HangmanConfig::default())
    }
}

fn is_guessed(state: &GameState, letter: char) -> bool {
    state.public.has_used(letter.encode_utf8(&mut [0; 4]))
}

impl Rules for Hangman {
    fn kind(&self) -> GameKind {
        GameKind::Hangman
    }

    fn setup(&self, mut rng: GameRng) -> GameState {
        let answer = choose_one(&self.config.words, &mut rng).unwrap_or_default();
        trace!(letters = answer.len(), "dealt hangman word");
        self.deal(&answer, rng)
    }

    fn validate(&self, state: &GameState, input: &str) -> Result<Move, InputError> {
        let guess = input.trim();
        let mut chars = guess.chars();

        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => return Err(InputError::invalid(guess, "a single letter")),
        };

        if is_guessed(state, letter) {
            return Err(InputError::Duplicate(letter.to_string()));
        }

        Ok(Move::Letter(letter))
    }

    fn resolve(&self, state: &mut GameState, mv: &Move) -> (Outcome, Feedback) {
        let Move::Letter(letter) = *mv else {
            return (Outcome::Invalid(ErrorKind::InvalidFormat), Feedback::None);
        };

        if !state.public.remember(letter.to_string()) {
            return (Outcome::Invalid(ErrorKind::Duplicate), Feedback::None);
        }

        let positions: SmallVec<[usize; 4]> = state
            .word()
            .unwrap_or_default()
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == letter)
            .map(|(i, _)| i)
            .collect();

        let outcome = if positions.is_empty() {
            let wrong = state.public.add_counter(WRONG_GUESSES, 1);
            if wrong >= self.config.max_wrong_guesses {
                state.public.phase = Phase::Lost;
                Outcome::Lose { delta: 0 }
            } else {
                Outcome::Continue
            }
        } else if Self::is_solved(state) {
            state.public.phase = Phase::Won;
            Outcome::Win { delta: 0 }
        } else {
            Outcome::Continue
        };

        (outcome, Feedback::Letter { letter, positions })
    }

    fn prompt(&self, state: &GameState) -> String {
        format!("{}\n{}\nEnter a letter: ", self.gallows(state), Self::hint(state))
    }

    fn report(&self, state: &GameState, _outcome: &Outcome) -> String {
        match state.public.last_round().map(|r| &r.feedback) {
            Some(Feedback::Letter { letter, positions }) if positions.is_empty() => format!(
                "No {letter} in the word ({}/{} wrong)",
                Self::wrong_guesses(state),
                self.config.max_wrong_guesses
            ),
            Some(Feedback::Letter { letter, positions }) => {
                format!("Found {letter} x{}", positions.len())
            }
            _ => String::new(),
        }
    }

    fn summary(&self, state: &GameState) -> String {
        let answer = state.word().unwrap_or_default();
        match state.phase() {
            Phase::Won => format!(
                "{}\n{}\nYOU WIN",
                self.gallows(state),
                spaced(answer.chars())
            ),
            Phase::Lost => format!(
                "{}\nThe answer is: {answer}\nYOU LOST",
                self.gallows(state)
            ),
            _ => format!("The answer was: {answer}\nBye"),
        }
    }

    fn report_error(&self, _state: &GameState, error: &InputError) -> String {
        match error {
            InputError::InvalidFormat { .. } => "Invalid input: enter a single letter".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &Hangman, state: GameState, letters: &str) -> (GameState, Vec<Outcome>) {
        letters.chars().fold((state, Vec::new()), |(state, mut outcomes), c| {
            let (next, outcome) = game.evaluate(&state, &Move::Letter(c));
            outcomes.push(outcome);
            (next, outcomes)
        })
    }

    #[test]
    fn test_setup_deals_known_word() {
        let game = Hangman::default();
        let state = game.setup(GameRng::new(42));

        let word = state.word().unwrap();
        assert!(game.config().words.iter().any(|w| w == word));
        assert_eq!(Hangman::wrong_guesses(&state), 0);
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn test_validate() {
        let game = Hangman::default();
        let state = game.deal("otter", GameRng::new(1));

        assert_eq!(game.validate(&state, "e\n"), Ok(Move::Letter('e')));
        assert_eq!(game.validate(&state, "E"), Ok(Move::Letter('e')));

        for bad in ["", "ab", "7", "?", " "] {
            assert_eq!(
                game.validate(&state, bad).unwrap_err().kind(),
                ErrorKind::InvalidFormat,
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_validate_duplicate() {
        let game = Hangman::default();
        let state = game.deal("otter", GameRng::new(1));
        let (state, _) = game.evaluate(&state, &Move::Letter('t'));

        let err = game.validate(&state, "T").unwrap_err();
        assert_eq!(err, InputError::Duplicate("t".to_string()));
        assert_eq!(err.kind(), ErrorKind::Duplicate);
    }

    #[test]
    fn test_hit_reveals_all_positions() {
        let game = Hangman::default();
        let state = game.deal("otter", GameRng::new(1));

        let (state, outcome) = game.evaluate(&state, &Move::Letter('t'));

        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(Hangman::hint(&state), "_ t t _ _");
        assert_eq!(Hangman::wrong_guesses(&state), 0);
        assert_eq!(
            state.public.last_round().unwrap().feedback,
            Feedback::Letter {
                letter: 't',
                positions: SmallVec::from_slice(&[1, 2])
            }
        );
    }

    #[test]
    fn test_miss_counts_wrong_guess() {
        let game = Hangman::default();
        let state = game.deal("otter", GameRng::new(1));

        let (state, outcome) = game.evaluate(&state, &Move::Letter('z'));

        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(Hangman::wrong_guesses(&state), 1);
        assert_eq!(Hangman::hint(&state), "_ _ _ _ _");
    }

    #[test]
    fn test_win() {
        let game = Hangman::default();
        let state = game.deal("otter", GameRng::new(1));

        let (state, outcomes) = play(&game, state, "oter");

        assert_eq!(outcomes.last(), Some(&Outcome::Win { delta: 0 }));
        assert_eq!(state.phase(), Phase::Won);
        assert!(Hangman::is_solved(&state));
        assert_eq!(state.public.round, 4);
    }

    #[test]
    fn test_lose_on_sixth_miss() {
        let game = Hangman::default();
        let state = game.deal("otter", GameRng::new(1));

        let (state, outcomes) = play(&game, state, "abcdf");
        assert_eq!(state.phase(), Phase::Playing);
        assert!(outcomes.iter().all(|o| *o == Outcome::Continue));

        let (state, outcome) = game.evaluate(&state, &Move::Letter('g'));
        assert_eq!(outcome, Outcome::Lose { delta: 0 });
        assert_eq!(state.phase(), Phase::Lost);
        assert_eq!(Hangman::wrong_guesses(&state), 6);
    }

    #[test]
    fn test_no_moves_after_terminal() {
        let game = Hangman::default();
        let state = game.deal("ox", GameRng::new(1));
        let (state, _) = play(&game, state, "ox");
        assert_eq!(state.phase(), Phase::Won);

        let (after, outcome) = game.evaluate(&state, &Move::Letter('a'));
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(after.public.round, state.public.round);
    }

    #[test]
    fn test_evaluate_rejects_wrong_move_kind() {
        let game = Hangman::default();
        let state = game.deal("otter", GameRng::new(1));

        let (after, outcome) = game.evaluate(&state, &Move::Guess(3));
        assert_eq!(outcome, Outcome::Invalid(ErrorKind::InvalidFormat));
        assert_eq!(after.public.round, 0);
        assert!(after.public.history.is_empty());
    }

    #[test]
    fn test_quit() {
        let game = Hangman::default();
        let state = game.deal("otter", GameRng::new(1));

        let (state, outcome) = game.evaluate(&state, &Move::Quit);
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(state.phase(), Phase::Quit);
        assert!(game.summary(&state).contains("otter"));
    }

    #[test]
    fn test_presentation() {
        let game = Hangman::default();
        let state = game.deal("otter", GameRng::new(1));

        let prompt = game.prompt(&state);
        assert!(prompt.contains("_ _ _ _ _"));
        assert!(prompt.ends_with("Enter a letter: "));

        let (state, outcome) = game.evaluate(&state, &Move::Letter('q'));
        assert_eq!(game.report(&state, &outcome), "No q in the word (1/6 wrong)");
        assert!(game.prompt(&state).contains(" o "));

        let (state, outcome) = game.evaluate(&state, &Move::Letter('t'));
        assert_eq!(game.report(&state, &outcome), "Found t x2");

        // The head fills in once the body appears.
        let (state, _) = game.evaluate(&state, &Move::Letter('z'));
        let prompt = game.prompt(&state);
        assert!(prompt.contains(" 0 ") && prompt.contains(" | "));
        assert!(!prompt.contains(" o "));
    }

    #[test]
    fn test_summary_lost_reveals_answer() {
        let game = Hangman::default();
        let state = game.deal("ox", GameRng::new(1));
        let (state, _) = play(&game, state, "abcdef");

        let summary = game.summary(&state);
        assert!(summary.contains("The answer is: ox"));
        assert!(summary.ends_with("YOU LOST"));
        assert!(summary.contains("/ \\"));
    }
}
