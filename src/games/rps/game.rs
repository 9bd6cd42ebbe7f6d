//! Rock-paper-scissors implementation.

use std::cmp::Ordering;

use crate::core::{ErrorKind, GameRng, GameState, Hand, InputError, Move, RpsConfig};
use crate::games::GameKind;
use crate::rules::{Feedback, Outcome, Rules};

/// Counter key for the player's score.
pub const SCORE: &str = "score";
/// Counter key for the computer's score.
pub const COMPUTER_SCORE: &str = "computer_score";

const QUIT: &str = "q";

/// Rock-paper-scissors rules.
#[derive(Clone, Debug, Default)]
pub struct RockPaperScissors {
    config: RpsConfig,
}

impl RockPaperScissors {
    pub fn new(config: RpsConfig) -> Self {
        assert!(config.win_points >= 0, "Win points must not be negative");
        Self { config }
    }

    #[must_use]
    pub fn score(state: &GameState) -> i64 {
        state.public.counter(SCORE)
    }

    #[must_use]
    pub fn computer_score(state: &GameState) -> i64 {
        state.public.counter(COMPUTER_SCORE)
    }

    /// Score one round between two known hands.
    pub fn play(&self, state: &mut GameState, player: Hand, computer: Hand) -> (Outcome, Feedback) {
        let points = self.config.win_points;
        let outcome = if player == computer {
            Outcome::Draw
        } else if player.beats() == computer {
            state.public.add_counter(SCORE, points);
            Outcome::Win { delta: points }
        } else {
            state.public.add_counter(COMPUTER_SCORE, points);
            Outcome::Lose { delta: 0 }
        };

        (outcome, Feedback::Throw { player, computer })
    }

    fn scoreline(state: &GameState) -> String {
        format!(
            "Your score: {} | Computer score: {}",
            Self::score(state),
            Self::computer_score(state)
        )
    }
}

impl Rules for RockPaperScissors {
    fn kind(&self) -> GameKind {
        GameKind::RockPaperScissors
    }

    fn setup(&self, rng: GameRng) -> GameState {
        let mut state = GameState::new(GameKind::RockPaperScissors, rng);
        state.public.set_counter(SCORE, 0);
        state.public.set_counter(COMPUTER_SCORE, 0);
        state
    }

    fn validate(&self, _state: &GameState, input: &str) -> Result<Move, InputError> {
        let choice = input.trim();

        if choice.eq_ignore_ascii_case(QUIT) {
            return Ok(Move::Quit);
        }

        Hand::parse(choice)
            .map(Move::Throw)
            .ok_or_else(|| InputError::invalid(choice, "rock, paper, scissors or q"))
    }

    fn resolve(&self, state: &mut GameState, mv: &Move) -> (Outcome, Feedback) {
        let Move::Throw(player) = *mv else {
            return (Outcome::Invalid(ErrorKind::InvalidFormat), Feedback::None);
        };

        let computer = state.rng.choose(&Hand::ALL).copied().unwrap_or(Hand::Rock);
        self.play(state, player, computer)
    }

    fn prompt(&self, _state: &GameState) -> String {
        "Pick a move (rock, paper or scissors), q to quit: ".to_string()
    }

    fn report(&self, state: &GameState, outcome: &Outcome) -> String {
        let Some(Feedback::Throw { player, computer }) = state.public.last_round().map(|r| &r.feedback)
        else {
            return String::new();
        };

        let result = match outcome {
            Outcome::Win { .. } => "You win",
            Outcome::Lose { .. } => "You lose",
            _ => "Draw",
        };

        format!(
            "Your move: {player} | Computer move: {computer} | Result: {result}\n{}",
            Self::scoreline(state)
        )
    }

    fn summary(&self, state: &GameState) -> String {
        let verdict = match Self::score(state).cmp(&Self::computer_score(state)) {
            Ordering::Greater => "You win",
            Ordering::Less => "You lose",
            Ordering::Equal => "Draw",
        };
        format!("{} | Result: {verdict}\nBye", Self::scoreline(state))
    }

    fn report_error(&self, state: &GameState, error: &InputError) -> String {
        format!("Incorrect option: {error}\n{}", Self::scoreline(state))
    }
}
