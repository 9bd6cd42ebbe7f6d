//! Slot machine implementation.

use tracing::trace;

use super::symbol::Symbol;
use crate::core::{ErrorKind, GameRng, GameState, InputError, Move, Phase, SlotConfig};
use crate::games::GameKind;
use crate::report::boxed;
use crate::rules::{Feedback, Outcome, Rules};

/// Counter key for the player's balance.
pub const BALANCE: &str = "balance";

const QUIT: &str = "q";

/// Slot machine rules.
#[derive(Clone, Debug, Default)]
pub struct SlotMachine {
    config: SlotConfig,
}

impl SlotMachine {
    pub fn new(config: SlotConfig) -> Self {
        assert!(
            config.starting_balance <= SlotConfig::MAX_BALANCE,
            "Starting balance must not exceed {}",
            SlotConfig::MAX_BALANCE
        );
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Start a session with the given balance.
    pub fn deal(&self, balance: u64, rng: GameRng) -> GameState {
        assert!(
            balance <= SlotConfig::MAX_BALANCE,
            "Starting balance must not exceed {}",
            SlotConfig::MAX_BALANCE
        );
        let mut state = GameState::new(GameKind::Slots, rng);
        state.public.set_counter(BALANCE, balance as i64);
        state
    }

    #[must_use]
    pub fn balance(state: &GameState) -> i64 {
        state.public.counter(BALANCE)
    }

    /// Largest bet allowed on a balance.
    ///
    /// Capped by the balance itself and by the room left for a top payout,
    /// so a winning row always fits in the counter.
    #[must_use]
    pub fn max_bet(balance: i64) -> i64 {
        let headroom = (i64::MAX - balance.max(0)) / (Symbol::MAX_MULTIPLIER as i64 - 1);
        balance.min(headroom)
    }

    /// Draw one row of three independent symbols.
    pub fn spin(&self, rng: &mut GameRng) -> [Symbol; 3] {
        std::array::from_fn(|_| {
            rng.choose_weighted(&self.config.weights)
                .map_or(Symbol::Cherry, |i| Symbol::ALL[i])
        })
    }

    /// Winnings for a row: bet times the multiplier on three of a kind.
    #[must_use]
    pub fn payout(row: &[Symbol; 3], bet: u64) -> u64 {
        let [a, b, c] = *row;
        if a == b && b == c {
            bet.saturating_mul(a.multiplier())
        } else {
            0
        }
    }

    /// Settle a bet against a drawn row.
    ///
    /// The stake is taken first and any payout credited after, so the
    /// balance moves by `payout - bet`. An empty balance loses. A bet the
    /// balance cannot cover, or whose payout would not fit, is refused and
    /// leaves the state alone.
    pub fn settle(&self, state: &mut GameState, bet: u64, row: [Symbol; 3]) -> (Outcome, Feedback) {
        let payout = Self::payout(&row, bet);
        let balance = Self::balance(state);

        let settled = i64::try_from(bet)
            .ok()
            .filter(|stake| *stake <= balance)
            .zip(i64::try_from(payout).ok())
            .and_then(|(stake, won)| Some((stake, won, (balance - stake).checked_add(won)?)));
        let Some((stake, won, after)) = settled else {
            return (Outcome::Invalid(ErrorKind::OutOfRange), Feedback::None);
        };

        state.public.set_counter(BALANCE, after);

        let outcome = if payout > 0 {
            Outcome::Win { delta: won - stake }
        } else {
            Outcome::Lose { delta: -stake }
        };

        if after == 0 {
            state.public.phase = Phase::Lost;
        }

        (outcome, Feedback::Spin { row, payout })
    }
}

impl Rules for SlotMachine {
    fn kind(&self) -> GameKind {
        GameKind::Slots
    }

    fn setup(&self, rng: GameRng) -> GameState {
        self.deal(self.config.starting_balance, rng)
    }

    fn validate(&self, state: &GameState, input: &str) -> Result<Move, InputError> {
        let bet = input.trim();

        if bet.eq_ignore_ascii_case(QUIT) {
            return Ok(Move::Quit);
        }

        if bet.is_empty() || !bet.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::invalid(bet, "a whole amount or q"));
        }

        let max = Self::max_bet(Self::balance(state));
        // All digits, so the only parse failure left is overflow.
        let Ok(amount) = bet.parse::<i64>() else {
            return Err(InputError::too_large("bet", bet, max));
        };
        if amount > 0 && amount <= max {
            Ok(Move::Bet(amount.unsigned_abs()))
        } else {
            Err(InputError::out_of_range("bet", amount, 1, max))
        }
    }

    fn resolve(&self, state: &mut GameState, mv: &Move) -> (Outcome, Feedback) {
        let Move::Bet(bet) = *mv else {
            return (Outcome::Invalid(ErrorKind::InvalidFormat), Feedback::None);
        };

        let max = Self::max_bet(Self::balance(state));
        let affordable = i64::try_from(bet).is_ok_and(|b| b > 0 && b <= max);
        if !affordable {
            return (Outcome::Invalid(ErrorKind::OutOfRange), Feedback::None);
        }

        let row = self.spin(&mut state.rng);
        trace!(?row, bet, "spun reels");
        self.settle(state, bet, row)
    }

    fn intro(&self, _state: &GameState) -> String {
        let symbols: Vec<_> = Symbol::ALL.iter().map(|s| s.emoji()).collect();
        boxed([
            "Welcome to Slots".to_string(),
            format!("Symbols: {}", symbols.join(" ")),
        ])
    }

    fn prompt(&self, state: &GameState) -> String {
        format!(
            "Current balance: Ksh {}\nPlace your bet (q to quit): Ksh ",
            Self::balance(state)
        )
    }

    fn report(&self, state: &GameState, _outcome: &Outcome) -> String {
        let Some(Feedback::Spin { row, payout }) = state.public.last_round().map(|r| &r.feedback)
        else {
            return String::new();
        };

        let reels = row.map(|s| s.emoji()).join(" | ");
        let balance = Self::balance(state);
        let verdict = if *payout > 0 {
            format!("You won Ksh {payout}. Balance Ksh {balance}")
        } else {
            format!("You lost the bet. Balance Ksh {balance}")
        };

        format!("{}\n{verdict}", boxed([reels]))
    }

    fn summary(&self, state: &GameState) -> String {
        let balance = Self::balance(state);
        match state.phase() {
            Phase::Lost => boxed([format!("Insufficient funds: your balance is Ksh {balance}")]),
            _ => boxed([format!("Game over: your balance is Ksh {balance}")]),
        }
    }

    fn report_error(&self, state: &GameState, error: &InputError) -> String {
        match error {
            InputError::InvalidFormat { .. } => "Please enter a valid amount".to_string(),
            InputError::OutOfRange { value: 0, .. } => "Bet amount must be greater than 0".to_string(),
            InputError::OutOfRange { value, max, .. } if *value <= Self::balance(state) => {
                format!("Bet amount can not be greater than Ksh {max}")
            }
            InputError::OutOfRange { .. } | InputError::TooLarge { .. } => {
                "Bet amount can not be greater than balance".to_string()
            }
            other => other.to_string(),
        }
    }
}
