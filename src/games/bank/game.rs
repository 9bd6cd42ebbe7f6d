//! Bank implementation.

use crate::core::{BankConfig, ErrorKind, GameRng, GameState, InputError, Move};
use crate::games::GameKind;
use crate::report::{boxed, format_cents};
use crate::rules::{Feedback, Outcome, Rules};

/// Counter key for the account balance in cents.
pub const BALANCE_CENTS: &str = "balance_cents";

const AMOUNT_FORMAT: &str = "an amount like 250 or 12.50";
const COMMAND_FORMAT: &str = "balance, deposit <amount>, withdraw <amount> or exit";

/// Parse a money amount with at most two decimals into cents.
///
/// ```
/// use console_games::games::bank::parse_amount;
///
/// assert_eq!(parse_amount("12.5"), Ok(1250));
/// assert_eq!(parse_amount("3"), Ok(300));
/// assert!(parse_amount("1.234").is_err());
/// ```
pub fn parse_amount(text: &str) -> Result<u64, InputError> {
    let invalid = || InputError::invalid(text, AMOUNT_FORMAT);
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (text, None),
    };

    if !digits(whole) {
        return Err(invalid());
    }

    let cents = match frac {
        None => 0,
        Some(f) if f.len() <= 2 && digits(f) => {
            let value: u64 = f.parse().map_err(|_| invalid())?;
            if f.len() == 1 {
                value * 10
            } else {
                value
            }
        }
        Some(_) => return Err(invalid()),
    };

    whole
        .parse::<u64>()
        .ok()
        .and_then(|units| units.checked_mul(100))
        .and_then(|c| c.checked_add(cents))
        .filter(|c| i64::try_from(*c).is_ok())
        .ok_or_else(|| InputError::too_large("amount", text, i64::MAX))
}

/// Bank rules.
#[derive(Clone, Debug, Default)]
pub struct Bank {
    config: BankConfig,
}

impl Bank {
    pub fn new(config: BankConfig) -> Self {
        assert!(
            Self::cents(config.starting_cents).is_some(),
            "Opening balance must fit in i64 cents"
        );
        Self { config }
    }

    #[must_use]
    pub fn balance(state: &GameState) -> i64 {
        state.public.counter(BALANCE_CENTS)
    }

    /// Amount as a signed cent count, if it fits.
    fn cents(amount: u64) -> Option<i64> {
        i64::try_from(amount).ok()
    }

    fn shown(amount: u64) -> String {
        Self::cents(amount).map_or_else(|| format!("{amount} cents"), format_cents)
    }
}

impl Rules for Bank {
    fn kind(&self) -> GameKind {
        GameKind::Bank
    }

    fn setup(&self, rng: GameRng) -> GameState {
        let mut state = GameState::new(GameKind::Bank, rng);
        let opening = Self::cents(self.config.starting_cents).unwrap_or_default();
        state.public.set_counter(BALANCE_CENTS, opening);
        state
    }

    fn validate(&self, state: &GameState, input: &str) -> Result<Move, InputError> {
        let invalid = || InputError::invalid(input.trim(), COMMAND_FORMAT);

        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_lowercase();
        let amount = words.next();
        if words.next().is_some() {
            return Err(invalid());
        }

        let balance = Self::balance(state);
        match (command.as_str(), amount) {
            ("1" | "balance", None) => Ok(Move::ShowBalance),
            ("2" | "deposit", Some(amount)) => {
                // parse_amount only yields values that fit in i64
                let cents = parse_amount(amount)?;
                let room = i64::MAX - balance;
                match Self::cents(cents) {
                    Some(0) => Err(InputError::out_of_range("deposit", 0, 1, room)),
                    Some(c) if c <= room => Ok(Move::Deposit(cents)),
                    _ => Err(InputError::too_large("deposit", amount, room)),
                }
            }
            ("3" | "withdraw", Some(amount)) => {
                let cents = parse_amount(amount)?;
                match Self::cents(cents) {
                    Some(c) if c > 0 && c <= balance => Ok(Move::Withdraw(cents)),
                    Some(c) => Err(InputError::out_of_range("withdrawal", c, 1, balance)),
                    None => Err(InputError::too_large("withdrawal", amount, balance)),
                }
            }
            ("4" | "exit" | "q" | "quit", None) => Ok(Move::Quit),
            _ => Err(invalid()),
        }
    }

    fn resolve(&self, state: &mut GameState, mv: &Move) -> (Outcome, Feedback) {
        let balance = Self::balance(state);
        let rejected = (Outcome::Invalid(ErrorKind::OutOfRange), Feedback::None);

        match *mv {
            Move::ShowBalance => (
                Outcome::Continue,
                Feedback::Balance(balance.unsigned_abs()),
            ),
            Move::Deposit(cents) => {
                match Self::cents(cents).filter(|c| *c > 0).and_then(|c| balance.checked_add(c)) {
                    Some(after) => {
                        state.public.set_counter(BALANCE_CENTS, after);
                        (Outcome::Continue, Feedback::Deposited(cents))
                    }
                    None => rejected,
                }
            }
            Move::Withdraw(cents) => match Self::cents(cents) {
                Some(c) if c > 0 && c <= balance => {
                    state.public.set_counter(BALANCE_CENTS, balance - c);
                    (Outcome::Continue, Feedback::Withdrew(cents))
                }
                _ => rejected,
            },
            _ => (Outcome::Invalid(ErrorKind::InvalidFormat), Feedback::None),
        }
    }

    fn intro(&self, _state: &GameState) -> String {
        boxed([
            "Welcome to the Bank",
            "1. Show balance",
            "2. Deposit <amount>",
            "3. Withdraw <amount>",
            "4. Exit",
        ])
    }

    fn prompt(&self, _state: &GameState) -> String {
        "Enter your choice (1-4): ".to_string()
    }

    fn report(&self, state: &GameState, _outcome: &Outcome) -> String {
        let balance = format_cents(Self::balance(state));
        match state.public.last_round().map(|r| &r.feedback) {
            Some(Feedback::Balance(_)) => boxed([format!("Your balance is {balance}")]),
            Some(Feedback::Deposited(cents)) => {
                format!("Deposited {}. Balance {balance}", Self::shown(*cents))
            }
            Some(Feedback::Withdrew(cents)) => {
                format!("Withdrew {}. Balance {balance}", Self::shown(*cents))
            }
            _ => String::new(),
        }
    }

    fn summary(&self, state: &GameState) -> String {
        boxed([
            format!("Final balance {}", format_cents(Self::balance(state))),
            "Thank you, have a nice day".to_string(),
        ])
    }

    fn report_error(&self, state: &GameState, error: &InputError) -> String {
        match error {
            InputError::OutOfRange { what: "withdrawal", value, .. } if *value > 0 => format!(
                "Insufficient funds: your balance is {}",
                format_cents(Self::balance(state))
            ),
            InputError::OutOfRange { .. } => "Amount must be greater than 0".to_string(),
            InputError::TooLarge { what: "deposit", max, .. } => format!(
                "Deposit too large: at most {} can be added",
                format_cents(*max)
            ),
            InputError::TooLarge { input, .. } => format!("{input} is too large an amount"),
            InputError::InvalidFormat { expected: AMOUNT_FORMAT, .. } => {
                "That is an invalid amount".to_string()
            }
            InputError::InvalidFormat { .. } => "You have entered an invalid choice".to_string(),
            other => other.to_string(),
        }
    }
}
