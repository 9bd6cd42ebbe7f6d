//! A toy bank account driven by the same round loop.
//!
//! Commands: `balance`, `deposit <amount>`, `withdraw <amount>`, `exit`,
//! or their menu numbers 1-4. Amounts allow up to two decimal places and
//! are stored as cents.

mod game;

pub use game::{parse_amount, Bank, BALANCE_CENTS};
